pub mod app;
pub mod search;
pub mod ui;

use crate::config::AppConfig;

/// Entry point: take over the terminal and run the search form
pub fn run(config: &AppConfig) -> crate::Result<()> {
    crate::logging::info("TUI", "Starting terminal UI");

    let mut terminal = ratatui::init();
    let result = app::App::new(config).run(&mut terminal);
    ratatui::restore();

    result
}
