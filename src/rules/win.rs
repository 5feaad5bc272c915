//! Win tracking over the run table
//!
//! Every run keeps one slot per side. A slot is `Open` until that side
//! places a stone in the run, counts stones after that, and turns `Blocked`
//! for good as soon as the other side places in the run. A run therefore
//! can never be completed by both sides.

use std::sync::Arc;

use crate::board::{Pos, Side, WIN_LENGTH};

use super::runs::{RunId, RunTable};

/// Occupancy of one run for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunCount {
    /// No stones of this side yet, and the run is still winnable
    #[default]
    Open,
    /// 1..=5 stones of this side, none of the other side
    Count(u8),
    /// The other side holds a cell of this run
    Blocked,
}

impl RunCount {
    /// Stones held, or `None` when the run is blocked for this side
    #[inline]
    pub fn stones(self) -> Option<u8> {
        match self {
            RunCount::Open => Some(0),
            RunCount::Count(n) => Some(n),
            RunCount::Blocked => None,
        }
    }

    #[inline]
    fn advance(self) -> RunCount {
        match self {
            RunCount::Open => RunCount::Count(1),
            RunCount::Count(n) => RunCount::Count(n + 1),
            RunCount::Blocked => RunCount::Blocked,
        }
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self == RunCount::Count(WIN_LENGTH as u8)
    }
}

/// Outcome of recording one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinCheck {
    pub game_over: bool,
    pub winner: Option<Side>,
    pub winning_run: Option<RunId>,
}

impl WinCheck {
    const CONTINUE: WinCheck = WinCheck {
        game_over: false,
        winner: None,
        winning_run: None,
    };
}

/// Per-run, per-side occupancy counters and the game-over latch
#[derive(Debug, Clone)]
pub struct WinTracker {
    runs: Arc<RunTable>,
    counts: [Vec<RunCount>; 2],
    winner: Option<Side>,
    winning_run: Option<RunId>,
}

impl WinTracker {
    pub fn new(runs: Arc<RunTable>) -> Self {
        let len = runs.len();
        Self {
            runs,
            counts: [vec![RunCount::Open; len], vec![RunCount::Open; len]],
            winner: None,
            winning_run: None,
        }
    }

    /// Record a stone of `side` at `pos`.
    ///
    /// Every run through the cell advances for `side` and becomes blocked
    /// for the other side. The first run (by id) that reaches five decides
    /// the winner.
    pub fn record_move(&mut self, pos: Pos, side: Side) -> WinCheck {
        debug_assert!(self.winner.is_none(), "move recorded after game over");

        let own = side.index();
        let other = side.opponent().index();
        let mut completed = None;

        for &id in self.runs.runs_through(pos) {
            let slot = &mut self.counts[own][id as usize];
            *slot = slot.advance();
            if completed.is_none() && slot.is_complete() {
                completed = Some(id);
            }
            self.counts[other][id as usize] = RunCount::Blocked;
        }

        match completed {
            Some(id) => {
                self.winner = Some(side);
                self.winning_run = Some(id);
                WinCheck {
                    game_over: true,
                    winner: Some(side),
                    winning_run: Some(id),
                }
            }
            None => WinCheck::CONTINUE,
        }
    }

    /// Counter of `side` for run `id`
    #[inline]
    pub fn count(&self, side: Side, id: RunId) -> RunCount {
        self.counts[side.index()][id as usize]
    }

    /// All counters of one side, indexed by run id
    pub fn counts(&self, side: Side) -> &[RunCount] {
        &self.counts[side.index()]
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Cells of the completed run, if any
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_run.map(|id| self.runs.run(id).cells)
    }

    pub fn winning_run(&self) -> Option<RunId> {
        self.winning_run
    }

    pub fn run_table(&self) -> &Arc<RunTable> {
        &self.runs
    }
}
