use ds_site::template::view_blocks;
use ds_site::Site;
use eframe::egui;

use super::blocks::{show_block, BlockContext};
use crate::command_sender::CommandSender;
use crate::theme::{Palette, CONTENT_WIDTH};

/// The transition region and the footer, in one scroll area.
pub fn page(
    ctx: &egui::Context,
    site: &mut Site,
    palette: &Palette,
    commands: &CommandSender,
    now: f64,
    mobile: bool,
) {
    let visible = site.visible(now);
    let current = site.current();
    let forced_offset = site.forced_scroll_offset(now);

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(palette.background))
        .show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .auto_shrink([false, false]);
            if let Some(offset) = forced_offset {
                scroll_area = scroll_area.vertical_scroll_offset(offset);
            }

            let output = scroll_area.show(ui, |ui| {
                let side = ((ui.available_width() - CONTENT_WIDTH) / 2.0).max(24.0);

                let region = egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: side,
                        right: side,
                        top: 48.0,
                        bottom: 48.0,
                    })
                    .show(ui, |ui| {
                        let mut block_ctx = BlockContext {
                            palette,
                            links: &site.links,
                            maps: &site.content.maps,
                            brand: &site.content.brand,
                            map_tabs: &mut site.map_tabs,
                            contact_form: &mut site.contact_form,
                            marquee: &site.marquee,
                            commands,
                            now,
                            mobile,
                        };

                        // An outgoing view is only drawn, never edited
                        ui.add_enabled_ui(visible.view == current, |ui| {
                            for block in view_blocks(&site.content, visible.view) {
                                show_block(ui, &mut block_ctx, &block);
                            }
                        });
                    })
                    .response
                    .rect;

                // Fade by veiling the region in the page colour
                if visible.opacity < 1.0 {
                    ui.painter().rect_filled(
                        region,
                        0.0,
                        palette.background.gamma_multiply(1.0 - visible.opacity),
                    );
                }

                super::footer(ui, &site.content, &site.links, palette, commands, mobile);
            });

            site.report_scroll(output.state.offset.y);
        });
}
