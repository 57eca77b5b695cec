use ds_site::contact_form::{ContactForm, FormField};
use ds_site::content::FormLabels;
use eframe::egui;

use crate::command_sender::{CommandSender, UICommand};
use crate::theme::{Palette, EYEBROW_SIZE};

fn labels(form: &FormLabels, field: FormField) -> (&str, &str) {
    match field {
        FormField::Name => (form.name_label.as_str(), form.name_placeholder.as_str()),
        FormField::Email => (form.email_label.as_str(), form.email_placeholder.as_str()),
        FormField::Message => (
            form.message_label.as_str(),
            form.message_placeholder.as_str(),
        ),
    }
}

pub fn contact_form(
    ui: &mut egui::Ui,
    form_labels: &FormLabels,
    form: &mut ContactForm,
    palette: &Palette,
    commands: &CommandSender,
) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(32.0))
        .show(ui, |ui| {
            for field in FormField::ALL {
                let (label, placeholder) = labels(form_labels, field);

                ui.label(palette.eyebrow(label));

                let value = form.field_mut(field);
                let edit = if field.is_multiline() {
                    egui::TextEdit::multiline(value).desired_rows(4)
                } else {
                    egui::TextEdit::singleline(value)
                };
                ui.add(
                    edit.hint_text(placeholder.to_uppercase())
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(24.0);
            }

            let submit = egui::Button::new(
                egui::RichText::new(form_labels.submit.to_uppercase())
                    .size(EYEBROW_SIZE + 1.0)
                    .strong()
                    .color(palette.background),
            )
            .fill(palette.primary)
            .min_size(egui::vec2(ui.available_width(), 52.0));

            if ui.add(submit).clicked() {
                commands.send_ui(UICommand::SubmitContactForm);
            }
        });
}
