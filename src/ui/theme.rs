//! Theme and geometry constants for the Gobang GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Stone colors
pub const PLAYER_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const COMPUTER_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COMPUTER_STONE_RIM: Color32 = Color32::from_rgb(120, 120, 125);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Result banners
pub const RESULT_WIN_BG: Color32 = Color32::from_rgb(40, 120, 70); // "You win"
pub const RESULT_LOSS_BG: Color32 = Color32::from_rgb(170, 50, 50); // "AI win"
pub const RESULT_DRAW_BG: Color32 = Color32::from_rgb(80, 80, 90);
pub const NOTICE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Canvas geometry, in pixels
pub const CANVAS_SIZE: f32 = 450.0;
pub const CELL_SPACING: f32 = 30.0;
pub const BOARD_MARGIN: f32 = 15.0;
pub const STONE_RADIUS: f32 = 12.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;
pub const WIN_LINE_WIDTH: f32 = 3.0;
