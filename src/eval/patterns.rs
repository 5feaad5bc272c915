//! Reward table for run occupancy
//!
//! A run with `n` stones of one side is worth a fixed reward to every empty
//! cell it passes through. The computer's own runs are worth slightly more
//! than the human's at every tier, so it extends its lines before blocking
//! an equally advanced human line.

use crate::rules::RunCount;

/// Rewards keyed by stone count
pub struct RunReward;

impl RunReward {
    /// Human run rewards for counts 0..=4
    pub const HUMAN: [u32; 5] = [0, 200, 400, 2_000, 10_000];
    /// Computer run rewards for counts 0..=4
    pub const AI: [u32; 5] = [0, 220, 420, 2_100, 20_000];

    /// Reward of a human run through an empty cell
    #[inline]
    pub fn human(count: RunCount) -> u32 {
        Self::lookup(&Self::HUMAN, count)
    }

    /// Reward of a computer run through an empty cell
    #[inline]
    pub fn ai(count: RunCount) -> u32 {
        Self::lookup(&Self::AI, count)
    }

    #[inline]
    fn lookup(table: &[u32; 5], count: RunCount) -> u32 {
        match count.stones() {
            Some(n) => table.get(n as usize).copied().unwrap_or(0),
            None => 0,
        }
    }
}
