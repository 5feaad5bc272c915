//! Greedy move selection for the computer
//!
//! The engine looks one ply deep and no further: every empty cell gets a
//! human score and an AI score from the run counters, and a single pass over
//! the board keeps the best cell seen so far. There is no search tree and no
//! randomness, so the same position always yields the same move.
//!
//! # Example
//!
//! ```
//! use gobang::{AIEngine, Board, Pos, RunTable, Side, WinTracker};
//!
//! let mut board = Board::new();
//! let mut tracker = WinTracker::new(RunTable::shared());
//! board.apply_move(Pos::new(7, 7), Side::Player);
//! tracker.record_move(Pos::new(7, 7), Side::Player);
//!
//! let engine = AIEngine::new();
//! let result = engine.select_move_with_stats(&board, &tracker);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::eval::{evaluate_cell, CellScore};
use crate::rules::WinTracker;

/// How the selected move was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Highest scoring cell of the board pass
    Scored,
    /// Empty board: opening move
    Opening,
    /// Nothing scored above zero: first empty cell
    Fallback,
}

/// Result of a move selection with statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Selected cell, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Scores of the selected cell
    pub score: CellScore,
    /// The winning value of the pass (max of all compared scores)
    pub max_value: u32,
    pub kind: SelectionKind,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Greedy single-ply engine
#[derive(Debug, Clone)]
pub struct AIEngine {
    /// Reply when the computer has to open on an empty board
    opening: Pos,
}

impl AIEngine {
    /// Engine that opens in the centre
    pub fn new() -> Self {
        Self { opening: Pos::center() }
    }

    /// Engine with a custom empty-board move
    pub fn with_opening(opening: Pos) -> Self {
        Self { opening }
    }

    /// Best cell for the computer, `None` if the board is full
    pub fn select_move(&self, board: &Board, tracker: &WinTracker) -> Option<Pos> {
        self.select_move_with_stats(board, tracker).best_move
    }

    /// Best cell for the computer together with its scores.
    ///
    /// Each empty cell is compared twice against the running maximum: first
    /// by its human score (ties go to the higher AI score), then by its AI
    /// score (ties go to the higher human score).
    pub fn select_move_with_stats(&self, board: &Board, tracker: &WinTracker) -> MoveResult {
        let start = Instant::now();

        let mut max_value = 0u32;
        let mut best: Option<Pos> = None;
        let mut best_score = CellScore::default();

        for pos in board.empty_cells() {
            let score = evaluate_cell(tracker, pos);

            if score.human > max_value {
                max_value = score.human;
                best = Some(pos);
                best_score = score;
            } else if score.human == max_value && score.ai > best_score.ai {
                best = Some(pos);
                best_score = score;
            }

            if score.ai > max_value {
                max_value = score.ai;
                best = Some(pos);
                best_score = score;
            } else if score.ai == max_value && score.human > best_score.human {
                best = Some(pos);
                best_score = score;
            }
        }

        let (best_move, kind) = match best {
            Some(pos) => (Some(pos), SelectionKind::Scored),
            None => self.fallback(board),
        };

        let result = MoveResult {
            best_move,
            score: best_score,
            max_value,
            kind,
            time_us: start.elapsed().as_micros() as u64,
        };
        debug!(
            best = ?result.best_move,
            human = result.score.human,
            ai = result.score.ai,
            kind = ?result.kind,
            time_us = result.time_us,
            "computer move selected"
        );
        result
    }

    fn fallback(&self, board: &Board) -> (Option<Pos>, SelectionKind) {
        if board.is_board_empty() {
            return (Some(self.opening), SelectionKind::Opening);
        }
        (board.empty_cells().next(), SelectionKind::Fallback)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
