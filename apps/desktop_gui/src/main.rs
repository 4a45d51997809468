mod backend_bridge;
mod controller;
mod ui;

use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use url::Url;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::spawn_submission_worker;
use client_core::THEME_STORAGE_KEY;
use content::Catalog;
use controller::events::UiEvent;
use ui::app::SoulivoApp;

/// Desktop rendition of the Soulivo wellness studio site.
#[derive(Debug, Parser)]
#[command(name = "soulivo", version, about)]
struct Args {
    /// Base URL of the external submissions API.
    #[arg(long, default_value = "https://api.soulivo.com/")]
    api_base_url: Url,

    /// Timeout for form submissions, in seconds.
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(32);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_submission_worker(
        cmd_rx,
        ui_tx,
        args.api_base_url,
        Duration::from_secs(args.request_timeout_secs),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Soulivo Wellness Studio")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Soulivo Wellness Studio",
        options,
        Box::new(move |cc| {
            let catalog = Catalog::load()?;
            // Read the persisted preference before the first frame so the
            // window comes up in the stored theme without a flash.
            let stored_theme = cc
                .storage
                .and_then(|storage| storage.get_string(THEME_STORAGE_KEY));
            Ok(Box::new(SoulivoApp::bootstrap(
                cmd_tx, ui_rx, catalog, stored_theme,
            )))
        }),
    )
}
