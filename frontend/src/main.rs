//! Frontend application entry point.

use logging::Logger;
use room_creation::components::theme;
use room_creation::{App, AppConfig, AppError};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("room_creation: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let loaded = AppConfig::load()?;
    let config = &loaded.config;

    let logger = Logger::to_file(&config.log_path, config.log_level, config.console_logging)?
        .for_component("Frontend");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([480.0, 360.0])
            .with_title("Room Creation"),
        ..Default::default()
    };

    let app_logger = logger.clone();
    eframe::run_native(
        "Room Creation",
        native_options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(App::new(loaded, app_logger)))
        }),
    )
    .map_err(|e| {
        logger.error(&format!("[APP] Window failed to start: {}", e));
        AppError::from(e)
    })
}
