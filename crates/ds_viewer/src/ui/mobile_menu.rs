use ds_site::controller::NavigationSource;
use ds_site::Site;
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::theme::{Palette, EYEBROW_SIZE};

/// Full screen menu curtain for narrow windows.
pub fn mobile_menu(ctx: &egui::Context, site: &Site, palette: &Palette, commands: &CommandSender) {
    let screen = ctx.screen_rect();

    egui::Area::new("mobile_menu")
        .order(egui::Order::Foreground)
        .fixed_pos(screen.left_top() + egui::vec2(0.0, 72.0))
        .show(ctx, |ui| {
            let rect = egui::Rect::from_min_size(
                ui.min_rect().min,
                egui::vec2(screen.width(), screen.height() - 72.0),
            );
            ui.painter().rect_filled(rect, 0.0, palette.background);
            ui.set_min_size(rect.size());

            ui.vertical_centered(|ui| {
                ui.add_space(48.0);

                for item in &site.content.menu {
                    let color = if site.is_active(item.view) {
                        palette.secondary
                    } else {
                        palette.primary
                    };

                    let text = egui::RichText::new(&item.label)
                        .size(32.0)
                        .italics()
                        .color(color);

                    if ui.add(egui::Button::new(text).frame(false)).clicked() {
                        commands.navigate(item.view, NavigationSource::MobileMenu);
                    }
                    ui.add_space(16.0);
                }

                ui.add_space(32.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} • {}",
                        site.content.brand.name, site.content.brand.registration
                    ))
                    .size(EYEBROW_SIZE)
                    .color(palette.primary.gamma_multiply(0.4)),
                );
            });
        });
}
