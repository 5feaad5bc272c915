//! Match state: board, win tracker and turn order for one game
//!
//! A [`Match`] is the explicit handle the UI and tests drive. It validates
//! every human move before touching any state, so a rejected move leaves the
//! board, the counters and the turn exactly as they were.
//!
//! # Example
//!
//! ```
//! use gobang::{Match, MatchStatus, Side};
//!
//! let mut game = Match::new_match();
//! let outcome = game.human_move(7, 7).unwrap();
//! assert!(outcome.game_over.is_none());
//!
//! let reply = game.computer_move().unwrap();
//! assert_eq!(reply.side, Side::Computer);
//! assert_eq!(game.status(), MatchStatus::InProgress);
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::board::{Board, Cell, Pos, Side, WIN_LENGTH};
use crate::engine::{AIEngine, MoveResult};
use crate::error::MoveError;
use crate::rules::{RunTable, WinTracker};

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
    /// Board filled up without five in a row
    Drawn,
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    /// `None` for a draw
    pub winner: Option<Side>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// An applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub side: Side,
    pub game_over: Option<GameOver>,
}

/// One game from empty board to a win or draw
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    tracker: WinTracker,
    engine: AIEngine,
    status: MatchStatus,
    last_move: Option<Pos>,
    move_count: usize,
    last_ai_result: Option<MoveResult>,
}

impl Match {
    /// Fresh match over the given run table; the human moves first
    pub fn new(runs: Arc<RunTable>) -> Self {
        Self::with_engine(runs, AIEngine::new())
    }

    pub fn with_engine(runs: Arc<RunTable>, engine: AIEngine) -> Self {
        Self {
            board: Board::new(),
            tracker: WinTracker::new(runs),
            engine,
            status: MatchStatus::InProgress,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
        }
    }

    /// Fresh match over the process-wide run table
    pub fn new_match() -> Self {
        Self::new(RunTable::shared())
    }

    /// Discard board, counters and turn; the run table is kept
    pub fn reset(&mut self) {
        let runs = Arc::clone(self.tracker.run_table());
        *self = Self::with_engine(runs, self.engine.clone());
        info!("new match started");
    }

    /// Place the human's stone at `(row, col)`.
    pub fn human_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.board.current_turn() != Side::Player {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(self.apply(pos, Side::Player))
    }

    /// Let the engine pick and play the computer's stone.
    pub fn computer_move(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.board.current_turn() != Side::Computer {
            return Err(MoveError::NotYourTurn);
        }
        let result = self.engine.select_move_with_stats(&self.board, &self.tracker);
        let pos = result.best_move.ok_or(MoveError::GameOver)?;
        self.last_ai_result = Some(result);
        Ok(self.apply(pos, Side::Computer))
    }

    /// Place a stone without validation and pass the turn.
    pub(crate) fn apply(&mut self, pos: Pos, side: Side) -> MoveOutcome {
        self.board.apply_move(pos, side);
        let check = self.tracker.record_move(pos, side);
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(row = pos.row, col = pos.col, ?side, "move applied");

        if let Some(winner) = check.winner {
            self.status = MatchStatus::Won(winner);
            info!(?winner, moves = self.move_count, "match won");
        } else if self.board.is_full() {
            self.status = MatchStatus::Drawn;
            info!(moves = self.move_count, "match drawn");
        } else {
            self.board.set_turn(side.opponent());
        }

        MoveOutcome {
            pos,
            side,
            game_over: self.game_over(),
        }
    }

    /// Ending details once the match is over
    pub fn game_over(&self) -> Option<GameOver> {
        match self.status {
            MatchStatus::InProgress => None,
            MatchStatus::Won(winner) => Some(GameOver {
                winner: Some(winner),
                winning_line: self.tracker.winning_line(),
            }),
            MatchStatus::Drawn => Some(GameOver {
                winner: None,
                winning_line: None,
            }),
        }
    }

    #[inline]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != MatchStatus::InProgress
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            MatchStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.board.current_turn()
    }

    /// Occupancy at `pos`, for rendering
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tracker(&self) -> &WinTracker {
        &self.tracker
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Statistics of the computer's latest decision
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new_match()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RunCount;
    use quickcheck::quickcheck;

    fn snapshot(game: &Match) -> (Board, Vec<RunCount>, Vec<RunCount>, MatchStatus, usize) {
        (
            game.board().clone(),
            game.tracker().counts(Side::Player).to_vec(),
            game.tracker().counts(Side::Computer).to_vec(),
            game.status(),
            game.move_count(),
        )
    }

    #[test]
    fn test_human_moves_first() {
        let mut game = Match::new_match();
        assert_eq!(game.current_turn(), Side::Player);
        assert_eq!(game.computer_move(), Err(MoveError::NotYourTurn));
        game.human_move(7, 7).unwrap();
        assert_eq!(game.current_turn(), Side::Computer);
        assert_eq!(game.human_move(0, 0), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut game = Match::new_match();
        assert_eq!(game.human_move(15, 0), Err(MoveError::OutOfBounds { row: 15, col: 0 }));
        assert_eq!(game.human_move(0, -1), Err(MoveError::OutOfBounds { row: 0, col: -1 }));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_rejects_occupied_cell_without_mutation() {
        let mut game = Match::new_match();
        game.human_move(7, 7).unwrap();
        let reply = game.computer_move().unwrap();

        let before = snapshot(&game);
        let err = game.human_move(reply.pos.row as i32, reply.pos.col as i32);
        assert_eq!(err, Err(MoveError::Occupied(reply.pos)));
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.current_turn(), Side::Player);
    }

    #[test]
    fn test_win_ends_match_and_blocks_further_moves() {
        let mut game = Match::new_match();
        for col in 3..7 {
            game.apply(Pos::new(9, col), Side::Player);
            game.board.set_turn(Side::Player);
        }

        let outcome = game.human_move(9, 7).unwrap();
        let over = outcome.game_over.unwrap();
        assert_eq!(over.winner, Some(Side::Player));
        let line = over.winning_line.unwrap();
        assert_eq!(line, [3, 4, 5, 6, 7].map(|col| Pos::new(9, col)));
        assert_eq!(game.status(), MatchStatus::Won(Side::Player));

        let before = snapshot(&game);
        assert_eq!(game.human_move(14, 14), Err(MoveError::GameOver));
        assert_eq!(game.computer_move(), Err(MoveError::GameOver));
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn test_computer_completes_five() {
        let mut game = Match::new_match();
        game.human_move(0, 0).unwrap();
        let mut last = None;
        while !game.is_over() {
            if game.current_turn() == Side::Computer {
                last = Some(game.computer_move().unwrap());
            } else {
                // Rightmost free cell of the bottom row
                let pos = game.board().empty_cells().filter(|p| p.row == 14).last().unwrap();
                game.human_move(pos.row as i32, pos.col as i32).unwrap();
            }
        }

        let last = last.unwrap();
        let over = game.game_over().unwrap();
        assert_eq!(over.winner, Some(Side::Computer));
        assert_eq!(last.pos, Pos::new(1, 5));
        assert_eq!(last.game_over, Some(over));
        assert_eq!(over.winning_line, Some([1, 2, 3, 4, 5].map(|col| Pos::new(1, col))));
        assert_eq!(game.move_count(), 14);
    }

    #[test]
    fn test_full_board_without_five_is_drawn() {
        let mut game = Match::new_match();
        let stripe = |pos: Pos| {
            if (pos.col as usize + 2 * pos.row as usize) % 4 / 2 == 0 {
                Side::Player
            } else {
                Side::Computer
            }
        };
        for pos in Pos::all().filter(|&p| p != Pos::new(14, 14)) {
            game.apply(pos, stripe(pos));
        }
        assert_eq!(game.status(), MatchStatus::InProgress);

        game.board.set_turn(Side::Player);
        let outcome = game.human_move(14, 14).unwrap();
        assert_eq!(game.status(), MatchStatus::Drawn);
        assert_eq!(
            outcome.game_over,
            Some(GameOver {
                winner: None,
                winning_line: None
            })
        );
    }

    #[test]
    fn test_reset_keeps_run_table() {
        let mut game = Match::new_match();
        game.human_move(7, 7).unwrap();
        game.computer_move().unwrap();
        let runs = Arc::clone(game.tracker().run_table());

        game.reset();
        assert!(Arc::ptr_eq(&runs, game.tracker().run_table()));
        assert!(game.board().is_board_empty());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_turn(), Side::Player);
        assert!(game.tracker().counts(Side::Player).iter().all(|&c| c == RunCount::Open));
    }

    quickcheck! {
        fn rejected_moves_are_idempotent(moves: Vec<(i8, i8)>) -> bool {
            let mut game = Match::new_match();
            for (row, col) in moves.into_iter().map(|(r, c)| (r % 16, c % 16)) {
                if game.is_over() {
                    break;
                }
                let before = snapshot(&game);
                match game.human_move(row as i32, col as i32) {
                    Ok(_) => {
                        if !game.is_over() && game.computer_move().is_err() {
                            return false;
                        }
                    }
                    Err(_) => {
                        if snapshot(&game) != before {
                            return false;
                        }
                    }
                }
            }
            true
        }
    }
}
