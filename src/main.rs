#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sticker_sketchpad::{SketchpadApp, SketchpadConfig, SketchpadError};

fn main() -> Result<(), SketchpadError> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SketchpadConfig::from_env()?;
    log::info!("Starting {} with a {:?} canvas", config.title, config.canvas_size);

    let [width, height] = config.canvas_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([width + 220.0, height + 40.0])
            .with_min_inner_size([width + 180.0, height + 20.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchpadApp::new(cc, &config)))),
    )
    .map_err(|err| {
        log::error!("Failed to open the sketchpad window: {}", err);
        SketchpadError::ContextUnavailable(err.to_string())
    })
}
