//! GUI module for the Gobang game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GobangApp;
pub use board_view::{cell_center, pixel_to_cell};
pub use game_state::{GameState, REJECTED_MOVE_NOTICE};
