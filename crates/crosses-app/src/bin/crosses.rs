//! Crosses desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Crosses application.

use crosses_app::CrossesApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.crosses";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Crosses, version={}",
        crosses_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((600.0, 680.0))
            .with_min_inner_size((240.0, 280.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Crosses",
        options,
        Box::new(|cc| Ok(Box::new(CrossesApp::new(cc)?))),
    )
}
