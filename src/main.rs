#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Slide Editor"),
        ..Default::default()
    };
    eframe::run_native(
        "slide_editor",
        native_options,
        Box::new(|cc| Ok(Box::new(slide_editor::SlideEditorApp::new(cc)))),
    )
}

// The editor only ships as a desktop app
#[cfg(target_arch = "wasm32")]
fn main() {}
