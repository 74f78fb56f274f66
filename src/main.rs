mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;

use app::GdpViewerApp;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset path: first argument, or the conventional file name.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gdp_pcap.csv".to_string());
    let dataset = data::loader::load_file(Path::new(&path))
        .with_context(|| format!("loading dataset from '{path}'"))?;
    log::info!(
        "loaded {} countries × {} years from '{path}'",
        dataset.countries.len(),
        dataset.years.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GDP Viewer – Per-Capita Trends",
        options,
        Box::new(move |_cc| Ok(Box::new(GdpViewerApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))?;

    Ok(())
}
