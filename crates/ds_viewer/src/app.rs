use crate::command_sender::command_channel;
use crate::command_sender::{CommandReceiver, CommandSender, UICommand};
use crate::theme::Palette;
use ds_site::content::SiteContent;
use ds_site::{Site, ViewId};
use eframe::egui;
use tracing::{debug, info};

fn run_ui_command(site: &mut Site, command: UICommand, now: f64) {
    debug!("Run ui command {:?}", command);

    match command {
        UICommand::Navigate { target, source } => {
            site.navigate(target, source, now);
        }
        UICommand::ToggleMobileMenu => {
            site.navbar.toggle_mobile_menu();
        }
        UICommand::SubmitContactForm => {
            site.contact_form.submit();
        }
    }
}

/// Apply every command raised while the frame was drawn, in order.
fn run_pending_ui_commands(site: &mut Site, receiver: &CommandReceiver, now: f64) {
    while let Some(cmd) = receiver.receive_ui() {
        run_ui_command(site, cmd, now);
    }
}

pub struct App {
    pub site: Site,
    palette: Palette,

    // Commands that will be run at the end of the frame
    pub command_sender: CommandSender,
    command_receiver: CommandReceiver,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, content: SiteContent) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let palette = Palette::new(&content.theme);
        palette.apply(&cc.egui_ctx);

        info!("Serving {}", content.brand.name);

        let (command_sender, command_receiver) = command_channel();

        Self {
            site: Site::new(content),
            palette,
            command_sender,
            command_receiver,
        }
    }

    fn run_pending_ui_commands(&mut self, now: f64) {
        run_pending_ui_commands(&mut self.site, &self.command_receiver, now);
    }

    /// The top-level ui
    fn ui(&mut self, egui_ctx: &egui::Context, now: f64, mobile: bool) {
        crate::ui::top_panel(
            egui_ctx,
            &self.site,
            &self.palette,
            &self.command_sender,
            mobile,
        );

        crate::ui::page(
            egui_ctx,
            &mut self.site,
            &self.palette,
            &self.command_sender,
            now,
            mobile,
        );

        if mobile && self.site.navbar.is_mobile_menu_open() {
            crate::ui::mobile_menu(egui_ctx, &self.site, &self.palette, &self.command_sender);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let mobile = ctx.screen_rect().width() < self.site.content.shell.mobile_breakpoint_px;

        if !mobile {
            self.site.navbar.close_mobile_menu();
        }

        self.ui(ctx, now, mobile);

        self.run_pending_ui_commands(now);

        // The marquee scrolls for as long as home is on screen
        if self.site.is_animating(now) || self.site.visible(now).view == ViewId::Home {
            ctx.request_repaint();
        }
    }
}
