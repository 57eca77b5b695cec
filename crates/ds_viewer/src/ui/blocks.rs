use ds_site::contact_form::ContactForm;
use ds_site::content::{
    Brand, CallToAction, ContactContent, Hero, Highlight, Maps, PracticeArea, Presence, Teaser,
};
use ds_site::controller::NavigationSource;
use ds_site::links::OutboundLinks;
use ds_site::map_tab::MapTabs;
use ds_site::marquee::Marquee;
use ds_site::template::Block;
use ds_site::ViewId;
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::theme::{Palette, BODY_SIZE, EYEBROW_SIZE, HERO_SIZE, TITLE_SIZE};

const SECTION_SPACING: f32 = 72.0;

/// Everything a block may read or touch while it is drawn. Borrowed field by
/// field from the site so the form and the map tabs stay mutable.
pub struct BlockContext<'a> {
    pub palette: &'a Palette,
    pub links: &'a OutboundLinks,
    pub maps: &'a Maps,
    pub brand: &'a Brand,
    pub map_tabs: &'a mut MapTabs,
    pub contact_form: &'a mut ContactForm,
    pub marquee: &'a Marquee,
    pub commands: &'a CommandSender,
    pub now: f64,
    pub mobile: bool,
}

impl BlockContext<'_> {
    fn columns(&self, wide: usize) -> usize {
        if self.mobile {
            1
        } else {
            wide
        }
    }
}

pub fn show_block(ui: &mut egui::Ui, ctx: &mut BlockContext, block: &Block) {
    match *block {
        Block::Hero {
            hero,
            badge,
            action,
        } => hero_block(ui, ctx, hero, badge, action),
        Block::Banner(text) => banner(ui, ctx, text),
        Block::Heading {
            subtitle,
            title,
            centered,
        } => {
            if centered {
                ui.vertical_centered(|ui| heading(ui, ctx.palette, subtitle, title));
            } else {
                heading(ui, ctx.palette, subtitle, title);
            }
        }
        Block::Statement(text) => {
            ui.vertical_centered(|ui| {
                ui.label(ctx.palette.title(text, 22.0));
            });
            ui.add_space(SECTION_SPACING);
        }
        Block::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                ui.label(ctx.palette.body(paragraph));
                ui.add_space(12.0);
            }
            ui.add_space(24.0);
        }
        Block::PracticeGrid { areas, action } => practice_grid(ui, ctx, areas, action),
        Block::NavigateLink { label, action } => {
            navigate_link(ui, ctx.palette, ctx.commands, label, action);
            ui.add_space(24.0);
        }
        Block::Teaser { teaser, action } => teaser_block(ui, ctx, teaser, action),
        Block::Quote(text) => quote(ui, ctx.palette, text),
        Block::Presence(presence) => presence_block(ui, ctx, presence),
        Block::Portrait { image_url, badge } => {
            portrait(ui, ctx.palette, image_url, badge, 420.0);
            ui.add_space(SECTION_SPACING);
        }
        Block::Highlights(highlights) => {
            let columns = ctx.columns(2);
            let palette = ctx.palette;
            ui.columns(columns, |columns| {
                let count = columns.len();
                for (i, highlight) in highlights.iter().enumerate() {
                    highlight_card(&mut columns[i % count], palette, highlight);
                }
            });
            ui.add_space(SECTION_SPACING);
        }
        Block::ContactChannels(contact) => contact_channels(ui, ctx, contact),
        Block::ContactForm(labels) => {
            super::contact_form(ui, labels, ctx.contact_form, ctx.palette, ctx.commands);
            ui.add_space(SECTION_SPACING);
        }
        Block::MessagingCallToAction(cta) => call_to_action(ui, ctx, cta),
    }
}

fn heading(ui: &mut egui::Ui, palette: &Palette, subtitle: &str, title: &str) {
    ui.label(palette.eyebrow(subtitle));
    ui.add_space(8.0);
    ui.label(palette.title(title, TITLE_SIZE));
    ui.add_space(24.0);
}

fn navigate_link(
    ui: &mut egui::Ui,
    palette: &Palette,
    commands: &CommandSender,
    label: &str,
    action: ViewId,
) {
    let text = egui::RichText::new(format!("{} →", label.to_uppercase()))
        .size(EYEBROW_SIZE)
        .strong()
        .color(palette.secondary);

    if ui.add(egui::Button::new(text).frame(false)).clicked() {
        commands.navigate(action, NavigationSource::Content);
    }
}

fn hero_block(ui: &mut egui::Ui, ctx: &BlockContext, hero: &Hero, badge: &str, action: ViewId) {
    let palette = ctx.palette;
    let commands = ctx.commands;

    ui.columns(ctx.columns(2), |columns| {
        let ui = &mut columns[0];
        ui.add_space(48.0);
        ui.label(palette.eyebrow(badge));
        ui.add_space(12.0);
        ui.label(palette.title(&hero.title, HERO_SIZE));
        ui.label(
            egui::RichText::new(&hero.accent)
                .size(HERO_SIZE)
                .italics()
                .color(palette.secondary),
        );
        ui.add_space(16.0);
        ui.label(palette.body(&hero.summary));
        ui.add_space(32.0);
        if ui.add(palette.button(&hero.button)).clicked() {
            commands.navigate(action, NavigationSource::Content);
        }

        if let Some(ui) = columns.get_mut(1) {
            ui.add(
                egui::Image::new(hero.image_url.as_str())
                    .max_height(560.0)
                    .rounding(2.0),
            );
        }
    });

    ui.add_space(SECTION_SPACING);
}

/// Endless scrolling strip. The text is repeated so that shifting it by half
/// its width is seamless.
fn banner(ui: &mut egui::Ui, ctx: &BlockContext, text: &str) {
    let palette = ctx.palette;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 48.0),
        egui::Sense::hover(),
    );

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.primary);

    let galley = ui.fonts(|fonts| {
        fonts.layout_no_wrap(
            ctx.marquee.text(&text.to_uppercase()),
            egui::FontId::proportional(EYEBROW_SIZE + 2.0),
            palette.background,
        )
    });

    let offset = ctx.marquee.offset(ctx.now, galley.size().x / 2.0);
    let pos = egui::pos2(
        rect.left() + offset,
        rect.center().y - galley.size().y / 2.0,
    );
    painter.galley(pos, galley);

    ui.add_space(SECTION_SPACING);
}

fn practice_grid(
    ui: &mut egui::Ui,
    ctx: &BlockContext,
    areas: &[PracticeArea],
    action: Option<(&str, ViewId)>,
) {
    let palette = ctx.palette;
    let commands = ctx.commands;

    ui.columns(ctx.columns(areas.len().clamp(1, 4)), |columns| {
        let count = columns.len();
        for (i, area) in areas.iter().enumerate() {
            let ui = &mut columns[i % count];
            egui::Frame::none()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, palette.surface))
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_min_height(180.0);
                    ui.label(
                        egui::RichText::new(&area.numeral)
                            .size(TITLE_SIZE)
                            .italics()
                            .color(palette.secondary.gamma_multiply(0.5)),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new(area.label.to_uppercase())
                            .size(EYEBROW_SIZE + 1.0)
                            .strong(),
                    );
                    if let Some((label, view)) = action {
                        ui.add_space(16.0);
                        navigate_link(ui, palette, commands, label, view);
                    }
                });
            ui.add_space(12.0);
        }
    });

    ui.add_space(SECTION_SPACING);
}

fn teaser_block(ui: &mut egui::Ui, ctx: &BlockContext, teaser: &Teaser, action: ViewId) {
    let palette = ctx.palette;
    let commands = ctx.commands;

    egui::Frame::none()
        .fill(palette.surface)
        .inner_margin(egui::Margin::same(40.0))
        .show(ui, |ui| {
            ui.columns(ctx.columns(2), |columns| {
                portrait(&mut columns[0], palette, &teaser.image_url, &teaser.badge, 360.0);

                let count = columns.len();
                let ui = &mut columns[count - 1];
                ui.add_space(24.0);
                heading(ui, palette, &teaser.subtitle, &teaser.title);
                ui.label(palette.body(&teaser.body));
                ui.add_space(24.0);
                navigate_link(ui, palette, commands, &teaser.link, action);
            });
        });

    ui.add_space(SECTION_SPACING);
}

fn quote(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("“")
                .size(HERO_SIZE * 1.5)
                .color(palette.secondary.gamma_multiply(0.4)),
        );
        ui.label(palette.title(text, TITLE_SIZE - 4.0));
    });
    ui.add_space(SECTION_SPACING);
}

fn presence_block(ui: &mut egui::Ui, ctx: &mut BlockContext, presence: &Presence) {
    let columns = ctx.columns(2);
    let palette = ctx.palette;
    let maps = ctx.maps;
    let tabs = &mut *ctx.map_tabs;

    ui.columns(columns, |columns| {
        let ui = &mut columns[0];
        heading(ui, palette, &presence.subtitle, &presence.title);
        ui.label(palette.body(&presence.body));
        ui.add_space(24.0);
        for highlight in &presence.highlights {
            highlight_card(ui, palette, highlight);
        }

        let count = columns.len();
        let ui = &mut columns[count - 1];
        if count == 1 {
            ui.add_space(24.0);
        }
        super::map_tabs(ui, maps, tabs, palette);
    });

    ui.add_space(SECTION_SPACING);
}

fn portrait(ui: &mut egui::Ui, palette: &Palette, image_url: &str, badge: &str, max_height: f32) {
    ui.vertical(|ui| {
        ui.add(
            egui::Image::new(image_url)
                .max_height(max_height)
                .rounding(2.0),
        );
        egui::Frame::none()
            .fill(palette.primary)
            .inner_margin(egui::Margin::symmetric(16.0, 10.0))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(badge.to_uppercase())
                        .size(EYEBROW_SIZE)
                        .strong()
                        .color(palette.background),
                );
            });
    });
}

fn highlight_card(ui: &mut egui::Ui, palette: &Palette, highlight: &Highlight) {
    ui.label(
        egui::RichText::new(&highlight.title)
            .size(BODY_SIZE + 2.0)
            .strong()
            .color(palette.secondary),
    );
    ui.add_space(4.0);
    ui.label(palette.body(&highlight.body));
    ui.add_space(20.0);
}

fn contact_channels(ui: &mut egui::Ui, ctx: &BlockContext, contact: &ContactContent) {
    let palette = ctx.palette;
    let links = ctx.links;

    ui.columns(ctx.columns(3), |columns| {
        let count = columns.len();

        let ui = &mut columns[0];
        ui.label(palette.eyebrow(&contact.phone_label));
        ui.hyperlink_to(
            egui::RichText::new(&links.phone_display).size(BODY_SIZE + 2.0),
            &links.telephone,
        );
        ui.add_space(16.0);

        let ui = &mut columns[1 % count];
        ui.label(palette.eyebrow(&contact.email_label));
        ui.hyperlink_to(
            egui::RichText::new(&links.email).size(BODY_SIZE + 2.0),
            format!("mailto:{}", links.email),
        );
        ui.add_space(16.0);

        let ui = &mut columns[2 % count];
        ui.label(palette.eyebrow(&contact.registration_label));
        ui.label(palette.body(&ctx.brand.registration));
        ui.add_space(16.0);
    });

    ui.add_space(32.0);
}

fn call_to_action(ui: &mut egui::Ui, ctx: &BlockContext, cta: &CallToAction) {
    let palette = ctx.palette;

    egui::Frame::none()
        .fill(palette.primary)
        .inner_margin(egui::Margin::same(48.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(cta.eyebrow.to_uppercase())
                        .size(EYEBROW_SIZE)
                        .strong()
                        .color(palette.secondary),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(&cta.title)
                        .size(TITLE_SIZE)
                        .italics()
                        .color(palette.background),
                );
                ui.label(
                    egui::RichText::new(&cta.accent)
                        .size(TITLE_SIZE)
                        .italics()
                        .color(palette.secondary),
                );
                ui.add_space(24.0);
                ui.hyperlink_to(
                    egui::RichText::new(cta.button.to_uppercase())
                        .size(EYEBROW_SIZE + 2.0)
                        .strong()
                        .color(palette.background),
                    &ctx.links.messaging,
                );
            });
        });
}
