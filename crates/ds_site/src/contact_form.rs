use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The shape a delivery backend would have to accept.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent. There is no delivery backend yet.
    Suppressed,
}

/// Ephemeral contact form input. Never validated, never transmitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.field(field).is_empty())
    }

    pub fn submit(&self) -> SubmitOutcome {
        debug!("Contact form submission suppressed");
        SubmitOutcome::Suppressed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
