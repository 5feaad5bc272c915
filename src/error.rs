use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a move is rejected before it touches any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("the match is already over")]
    GameOver,

    #[error("it is not this side's turn")]
    NotYourTurn,
}

/// Errors from the persistent score store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read score file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write score file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse score file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
