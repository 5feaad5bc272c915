//! Game state management for the Gobang GUI

use tracing::warn;

use crate::board::Side;
use crate::game::GameOver;
use crate::session::{Session, Tally};

/// Notice shown when a click cannot be played
pub const REJECTED_MOVE_NOTICE: &str = "You cannot put a piece here.";

/// What the GUI shows around the board
pub struct GameState {
    pub session: Session,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            message: None,
        }
    }

    /// Start a new match; the score tally is kept
    pub fn reset(&mut self) {
        self.session.new_match();
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        let game = self.session.game();
        !game.is_over() && game.current_turn() == Side::Player
    }

    /// Play the clicked cell, then let the computer answer right away.
    pub fn try_place_stone(&mut self, row: i32, col: i32) {
        if self.session.game().is_over() {
            return;
        }

        match self.session.human_move(row, col) {
            Ok(outcome) => {
                self.message = None;
                if outcome.game_over.is_none() {
                    self.play_computer();
                }
            }
            Err(err) => {
                warn!(%err, row, col, "move rejected");
                self.message = Some(REJECTED_MOVE_NOTICE.to_string());
            }
        }
    }

    fn play_computer(&mut self) {
        if let Err(err) = self.session.computer_move() {
            warn!(%err, "computer could not move");
        }
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.session.game().game_over()
    }

    pub fn tally(&self) -> Tally {
        self.session.tally()
    }

    /// Banner text once the match has ended
    pub fn result_text(&self) -> Option<&'static str> {
        self.game_over().map(|over| match over.winner {
            Some(Side::Player) => "You win",
            Some(Side::Computer) => "AI win",
            None => "Draw",
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Session::in_memory())
    }
}
