use std::str::FromStr;

use crate::error::Error;

/// One of the five mutually exclusive content regions of the site.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    About,
    Expertise,
    Profile,
    Contact,
}

impl ViewId {
    /// Menu order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::About,
        ViewId::Expertise,
        ViewId::Profile,
        ViewId::Contact,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::About => "about",
            ViewId::Expertise => "expertise",
            ViewId::Profile => "profile",
            ViewId::Contact => "contact",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ViewId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.key() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        for view in ViewId::ALL {
            assert_eq!(view.key().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = "nonexistent-id".parse::<ViewId>();

        assert!(matches!(result, Err(Error::UnknownView(id)) if id == "nonexistent-id"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!("Home".parse::<ViewId>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&ViewId::Expertise).unwrap();

        assert_eq!(json, "\"expertise\"");
    }
}
