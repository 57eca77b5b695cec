use ds_site::content::Maps;
use ds_site::links::OutboundLinks;
use ds_site::map_tab::{MapLocation, MapTabs};
use eframe::egui;

use crate::theme::{Palette, EYEBROW_SIZE};

/// Two location tabs over the selected map. The map itself is an external
/// viewer, opened through its embed URL.
pub fn map_tabs(ui: &mut egui::Ui, maps: &Maps, tabs: &mut MapTabs, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.surface)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for location in MapLocation::ALL {
                    let embed = OutboundLinks::map(maps, location);
                    let selected = tabs.selected() == location;

                    let (fill, text_color) = if selected {
                        (palette.primary, egui::Color32::WHITE)
                    } else {
                        (egui::Color32::WHITE, palette.primary)
                    };

                    let text = egui::RichText::new(embed.label.to_uppercase())
                        .size(EYEBROW_SIZE - 1.0)
                        .color(text_color);

                    if ui.add(egui::Button::new(text).fill(fill)).clicked() {
                        tabs.select(location);
                    }
                }
            });

            ui.add_space(12.0);

            let embed = OutboundLinks::map(maps, tabs.selected());
            ui.label(egui::RichText::new("📍").size(28.0));
            ui.hyperlink_to(embed.label.clone(), &embed.embed_url);
        });
}
