//! Score tally persisted in a key-value session store
//!
//! The tally survives "new game": only the board and the counters reset.
//! Two counters are kept, `playerScore` and `aiScore`, each defaulting to 0.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::board::Side;
use crate::error::{MoveError, StoreError};
use crate::game::{Match, MoveOutcome};

/// Key of the human's win counter
pub const PLAYER_SCORE_KEY: &str = "playerScore";
/// Key of the computer's win counter
pub const AI_SCORE_KEY: &str = "aiScore";

/// Integer key-value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}

/// Store that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every update
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

/// Wins per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub player: i64,
    pub ai: i64,
}

impl Tally {
    /// Read both counters, absent keys count as 0
    pub fn load(store: &dyn SessionStore) -> Self {
        Self {
            player: store.get(PLAYER_SCORE_KEY).unwrap_or(0),
            ai: store.get(AI_SCORE_KEY).unwrap_or(0),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {} -- AI: {}", self.player, self.ai)
    }
}

/// Add one win for `side` and return the updated tally.
pub fn record_win(store: &mut dyn SessionStore, side: Side) -> Result<Tally, StoreError> {
    let key = match side {
        Side::Player => PLAYER_SCORE_KEY,
        Side::Computer => AI_SCORE_KEY,
    };
    let value = store.get(key).unwrap_or(0).saturating_add(1);
    store.set(key, value)?;
    Ok(Tally::load(store))
}

/// The current match plus the score store that outlives it
pub struct Session {
    game: Match,
    store: Box<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            game: Match::new_match(),
            store,
        }
    }

    /// Session with a throwaway in-memory tally
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn tally(&self) -> Tally {
        Tally::load(self.store.as_ref())
    }

    /// Forward a human move and settle the tally if it ends the match
    pub fn human_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.human_move(row, col)?;
        self.settle(&outcome);
        Ok(outcome)
    }

    /// Forward the computer's move and settle the tally if it ends the match
    pub fn computer_move(&mut self) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.computer_move()?;
        self.settle(&outcome);
        Ok(outcome)
    }

    /// Start over; the tally is kept
    pub fn new_match(&mut self) {
        self.game.reset();
    }

    fn settle(&mut self, outcome: &MoveOutcome) {
        let Some(winner) = outcome.game_over.and_then(|over| over.winner) else {
            return;
        };
        match record_win(self.store.as_mut(), winner) {
            Ok(tally) => info!(%tally, "score updated"),
            Err(err) => warn!(%err, "failed to persist score"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}
