use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Grid dimensions of the toy board.
    pub const BOARD_H: usize = 40;
    pub const BOARD_W: usize = 40;
    /// Side of one cell in pixels.
    pub const CELL_SIZE: f32 = 15.;

    pub const DEFAULT_STEPS_PER_SEC: f64 = 10.;
    pub const MIN_STEPS_PER_SEC: f64 = 1.;
    pub const MAX_STEPS_PER_SEC: f64 = 30.;

    pub const DEFAULT_SEED: u64 = 500;
    pub const DEFAULT_FILL_RATE: f64 = 0.5;

    /// Hand-placed starting pattern: a horizontal blinker near the top left
    /// corner, as `(row, col)` pairs.
    pub const INITIAL_PATTERN: [(usize, usize); 3] = [(2, 1), (2, 2), (2, 3)];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const WIDGET_GAP: f32 = 10.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::WHITE;

    pub const BOARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const ALIVE_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::GRAY;
    pub const GRID_LINE_WIDTH: f32 = 0.5;
}
