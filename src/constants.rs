pub const GUI_WINDOW_WIDTH: f32 = 550.0;
pub const GUI_WINDOW_HEIGHT: f32 = 400.0;

pub const GUI_OUTPUT_ROWS: usize = 10;
