// src/main.rs
use anyhow::Result;
use eframe::egui;

mod api;
mod app;
mod config;
mod state;
mod ui;
mod utils;

use app::VidqaApp;
use config::Settings;
use state::AppState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!("using backend at {}", settings.api_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("YouTube-QnA AI Assistant"),
        ..Default::default()
    };

    eframe::run_native(
        "YouTube-QnA AI Assistant",
        options,
        Box::new(move |_cc| Box::new(VidqaApp::new(AppState::new(&settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
