//! Gridlock desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Sudoku board.

use eframe::egui::{self, Vec2};
use gridlock_app::GridlockApp;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!("starting Sudoku Game v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(600.0, 700.0)),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        "Sudoku Game",
        options,
        Box::new(|cc| Ok(Box::new(GridlockApp::new(cc)))),
    )
}
