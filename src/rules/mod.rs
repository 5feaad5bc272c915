//! Game rules for Gobang
//!
//! - Run enumeration (every 5-cell line on the board)
//! - Win tracking (per-run occupancy counters)

pub mod runs;
pub mod win;

// Re-exports for convenient access
pub use runs::{Orientation, Run, RunId, RunTable, RUN_COUNT};
pub use win::{RunCount, WinCheck, WinTracker};
