use anyhow::Result;

mod app;
mod debug;

use app::ProfileBoardApp;
use eframe::egui;

fn main() -> Result<()> {
    // Initialize logging first so library crates' log::info!() etc. reach
    // stderr. RUST_LOG selects the level (default: info).
    debug::init_log_bridge();

    log::info!("Starting profile-board");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Profile Board")
            .with_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "profile-board",
        native_options,
        Box::new(|cc| Ok(Box::new(ProfileBoardApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop error: {e}"))?;

    log::info!("Event loop exited");
    Ok(())
}
