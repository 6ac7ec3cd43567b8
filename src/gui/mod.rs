pub mod app;

pub use app::UserSearchApp;

use crate::config::AppConfig;

/// Entry point: launch the native GUI window
pub fn run(config: &AppConfig) -> crate::Result<()> {
    crate::logging::info("GUI", "Starting native window");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("usersearch")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "usersearch",
        native_options,
        Box::new(|cc| Ok(Box::new(app::UserSearchApp::new(cc)))),
    )
    .map_err(|e| crate::UserSearchError::Gui(e.to_string()))
}
