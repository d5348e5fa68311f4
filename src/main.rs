//! Demo of the round window chrome: title bar, sidebar menu and edge resizing.

mod app;

use crate::app::DemoApp;

use eframe::egui;
use round_window::{ChromeConfig, RoundWindow};

fn initial_inner_size(config: &ChromeConfig) -> egui::Vec2 {
    // Sidebar plus a content area wide enough for the pages
    let w = config.sidebar.width + 600.0;
    let h = config.title_bar.height + 420.0;
    egui::vec2(w, h).max(config.min_size())
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = DemoApp::chrome_config();
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = RoundWindow::viewport_builder("Round Window Demo", &config)
        .with_inner_size(initial_inner_size(&config));

    eframe::run_native(
        "Round Window Demo",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::<DemoApp>::default())
        }),
    )
}
