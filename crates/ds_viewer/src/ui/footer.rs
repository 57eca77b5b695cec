use ds_site::content::SiteContent;
use ds_site::controller::NavigationSource;
use ds_site::links::OutboundLinks;
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::theme::{Palette, BODY_SIZE, EYEBROW_SIZE};

/// Footer drawn at the end of every view, inside the scroll area.
pub fn footer(
    ui: &mut egui::Ui,
    content: &SiteContent,
    links: &OutboundLinks,
    palette: &Palette,
    commands: &CommandSender,
    mobile: bool,
) {
    let footer = &content.footer;
    let brand = &content.brand;
    let muted = palette.background.gamma_multiply(0.6);

    egui::Frame::none()
        .fill(palette.accent)
        .inner_margin(egui::Margin::symmetric(48.0, 56.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.columns(if mobile { 1 } else { 4 }, |columns| {
                let count = columns.len();

                let ui = &mut columns[0];
                ui.label(
                    egui::RichText::new(brand.name.to_uppercase())
                        .size(BODY_SIZE + 3.0)
                        .color(palette.background),
                );
                ui.label(egui::RichText::new(&brand.tagline).size(BODY_SIZE).color(muted));
                ui.add_space(24.0);

                let ui = &mut columns[1 % count];
                ui.label(column_title(&footer.navigation_title, palette));
                for item in &footer.navigation {
                    let text = egui::RichText::new(&item.label)
                        .size(BODY_SIZE)
                        .color(palette.background);
                    if ui.add(egui::Button::new(text).frame(false)).clicked() {
                        commands.navigate(item.view, NavigationSource::Footer);
                    }
                }
                ui.add_space(24.0);

                let ui = &mut columns[2 % count];
                ui.label(column_title(&footer.service_title, palette));
                for line in &footer.service_lines {
                    ui.label(egui::RichText::new(line).size(BODY_SIZE).color(muted));
                }
                ui.add_space(24.0);

                let ui = &mut columns[3 % count];
                ui.label(column_title(&footer.connect_title, palette));
                ui.hyperlink_to(
                    egui::RichText::new(&footer.social_label).color(palette.background),
                    &links.social,
                );
                ui.hyperlink_to(
                    egui::RichText::new(&footer.messaging_label).color(palette.background),
                    &links.messaging,
                );
            });

            ui.add_space(32.0);
            ui.separator();
            ui.add_space(16.0);

            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(&brand.copyright)
                        .size(EYEBROW_SIZE)
                        .color(muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(brand.motto.to_uppercase())
                            .size(EYEBROW_SIZE)
                            .color(palette.secondary),
                    );
                });
            });
        });
}

fn column_title(text: &str, palette: &Palette) -> egui::RichText {
    egui::RichText::new(text.to_uppercase())
        .size(EYEBROW_SIZE)
        .strong()
        .color(palette.secondary)
}
