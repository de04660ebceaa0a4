mod app;
mod color;
mod constants;

use constants::*;
use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use app::App;

fn main() -> Result {
    env_logger::init();

    let title = "Color Code Converter";

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT)),
            resizable: Some(false),
            maximize_button: Some(false),
            minimize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
