mod app;
mod callbacks;
mod color;
mod data;
mod query;
mod state;
mod ui;

use std::path::Path;

use app::LaunchDeckApp;
use eframe::egui;
use state::AppState;

/// Fixed dataset path, read once at startup. No re-read, no live reload.
const DATA_PATH: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is mandatory; without it there is nothing to serve.
    let dataset = match data::loader::load_file(Path::new(DATA_PATH)) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {DATA_PATH}: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launches across {} sites (payload {:.0}..{:.0} kg)",
        dataset.len(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDeckApp::new(AppState::new(dataset))))),
    )
}
