//! GPA Calculator - Weighted grade-point average over an editable course list
//!
//! A Rust desktop application for tracking courses and their units-weighted GPA.

mod config;
mod gui;
mod logging;
mod roster;
mod stats;

use anyhow::Context;
use config::{AppConfig, CONFIG_FILE_NAME};
use eframe::egui;
use gui::GpaApp;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let loaded = AppConfig::discover_in(&cwd);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    logging::init_logging(&config.log_filter)?;
    match loaded {
        Ok(Some(_)) => info!(file = CONFIG_FILE_NAME, "loaded configuration"),
        Ok(None) => info!("no {} found, using defaults", CONFIG_FILE_NAME),
        Err(e) => warn!(error = %e, "ignoring {}, using defaults", CONFIG_FILE_NAME),
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 400.0])
            .with_title(&config.window_title),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    info!(title = %app_name, "starting");

    // Run the application
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(GpaApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GPA Calculator exited with an error: {e}"))
}
