//! Per-cell scoring from run counters
//!
//! A cell's value for a side is the sum of rewards of every run through it,
//! keyed to that side's stone count in the run.

use crate::board::{Pos, Side};
use crate::rules::WinTracker;

use super::patterns::RunReward;

/// Both scores of one empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellScore {
    /// Value of the cell as a block against the human
    pub human: u32,
    /// Value of the cell as an extension of the computer's runs
    pub ai: u32,
}

/// Score `pos` from the current counters.
#[must_use]
pub fn evaluate_cell(tracker: &WinTracker, pos: Pos) -> CellScore {
    let mut score = CellScore::default();
    for &id in tracker.run_table().runs_through(pos) {
        score.human += RunReward::human(tracker.count(Side::Player, id));
        score.ai += RunReward::ai(tracker.count(Side::Computer, id));
    }
    score
}
