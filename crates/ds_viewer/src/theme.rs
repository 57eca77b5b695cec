use ds_site::content::{Rgb, Theme};
use eframe::egui;

pub const HERO_SIZE: f32 = 44.0;
pub const TITLE_SIZE: f32 = 30.0;
pub const EYEBROW_SIZE: f32 = 10.0;
pub const BODY_SIZE: f32 = 15.0;
pub const CONTENT_WIDTH: f32 = 1100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub accent: egui::Color32,
    pub background: egui::Color32,
    pub surface: egui::Color32,
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

impl Palette {
    pub fn new(theme: &Theme) -> Self {
        Self {
            primary: color(theme.primary),
            secondary: color(theme.secondary),
            accent: color(theme.accent),
            background: color(theme.background),
            surface: color(theme.surface),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = egui::Color32::WHITE;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.secondary;
        visuals.override_text_color = Some(self.primary);
        visuals.selection.bg_fill = self.secondary.gamma_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, self.primary);
        ctx.set_visuals(visuals);
    }

    /// Small uppercase label above headings.
    pub fn eyebrow(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text.to_uppercase())
            .size(EYEBROW_SIZE)
            .strong()
            .color(self.secondary)
    }

    pub fn title(&self, text: &str, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .italics()
            .color(self.primary)
    }

    pub fn body(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text).size(BODY_SIZE).color(self.primary)
    }

    /// Filled button in the brand colour.
    pub fn button(&self, text: &str) -> egui::Button {
        egui::Button::new(
            egui::RichText::new(text.to_uppercase())
                .size(EYEBROW_SIZE + 1.0)
                .strong()
                .color(self.background),
        )
        .fill(self.primary)
        .min_size(egui::vec2(220.0, 44.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_site::content::SiteContent;

    #[test]
    fn converts_theme_colours() {
        let content = SiteContent::embedded().unwrap();

        let palette = Palette::new(&content.theme);

        assert_eq!(palette.primary, egui::Color32::from_rgb(0x32, 0x2A, 0x26));
        assert_eq!(palette.secondary, egui::Color32::from_rgb(0xA6, 0x89, 0x66));
        assert_eq!(palette.background, egui::Color32::from_rgb(0xF9, 0xF7, 0xF2));
    }
}
