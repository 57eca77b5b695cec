use clap::Parser;
use ds_site::content::SiteContent;
use ds_viewer::app::App;
use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Desktop viewer for the practice site")]
struct Cli {
    /// JSON content file, the embedded content is used when omitted
    #[arg(short, long)]
    content: Option<std::path::PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    height: f32,
}

fn load_content(path: Option<&std::path::Path>) -> ds_site::Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path),
        None => SiteContent::embedded(),
    }
}

fn main() -> ds_viewer::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let content = match load_content(cli.content.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            error!("Could not load site content: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting {}", content.brand.name);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(cli.width, cli.height)),
        ..Default::default()
    };

    let title = content.brand.name.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Box::new(App::new(cc, content))),
    )?;

    Ok(())
}
