use ds_site::controller::NavigationSource;
use ds_site::{Site, ViewId};
use eframe::egui;

use crate::command_sender::{CommandSender, UICommand};
use crate::theme::{Palette, EYEBROW_SIZE};

/// The fixed navbar. Compact once the page is scrolled past the threshold.
pub fn top_panel(
    ctx: &egui::Context,
    site: &Site,
    palette: &Palette,
    commands: &CommandSender,
    mobile: bool,
) {
    let (fill, margin) = if site.navbar.is_compact() {
        (palette.background.gamma_multiply(0.95), 10.0)
    } else {
        (palette.background, 22.0)
    };

    egui::TopBottomPanel::top("top_panel_navbar")
        .show_separator_line(site.navbar.is_compact())
        .frame(
            egui::Frame::none()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(24.0, margin)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                brand(ui, site, palette, commands);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if mobile {
                        let icon = if site.navbar.is_mobile_menu_open() {
                            "✖"
                        } else {
                            "☰"
                        };
                        let toggle =
                            egui::Button::new(egui::RichText::new(icon).size(22.0)).frame(false);
                        if ui.add(toggle).clicked() {
                            commands.send_ui(UICommand::ToggleMobileMenu);
                        }
                    } else {
                        // Right to left, so walk the menu backwards
                        for item in site.content.menu.iter().rev() {
                            menu_entry(ui, site, palette, commands, item.view, &item.label);
                            ui.add_space(18.0);
                        }
                    }
                });
            });
        });
}

fn brand(ui: &mut egui::Ui, site: &Site, palette: &Palette, commands: &CommandSender) {
    let brand = &site.content.brand;

    let response = ui
        .vertical(|ui| {
            ui.label(
                egui::RichText::new(brand.name.to_uppercase())
                    .size(20.0)
                    .color(palette.primary),
            );
            ui.label(
                egui::RichText::new(&brand.registration)
                    .size(EYEBROW_SIZE - 2.0)
                    .strong()
                    .color(palette.secondary),
            );
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        commands.navigate(ViewId::Home, NavigationSource::Brand);
    }
}

fn menu_entry(
    ui: &mut egui::Ui,
    site: &Site,
    palette: &Palette,
    commands: &CommandSender,
    view: ViewId,
    label: &str,
) {
    let color = if site.is_active(view) {
        palette.secondary
    } else {
        palette.primary.gamma_multiply(0.6)
    };

    let text = egui::RichText::new(label.to_uppercase())
        .size(EYEBROW_SIZE)
        .color(color);

    if ui.add(egui::Button::new(text).frame(false)).clicked() {
        commands.navigate(view, NavigationSource::Menu);
    }
}
