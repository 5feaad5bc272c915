//! Evaluation module for Gobang cells
//!
//! - Reward table per run stone count
//! - Per-cell human/computer scores

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_cell, CellScore};
pub use patterns::RunReward;
