mod app;
mod color;
mod config;
mod data;
mod fmt;
mod state;
mod ui;

use app::ExpenseDashboardApp;
use config::{AppConfig, WINDOW_TITLE};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    log::info!("Reading expenses from {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ExpenseDashboardApp::new(config)))),
    )
}
