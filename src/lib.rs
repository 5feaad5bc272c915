//! Gobang: five in a row on a 15x15 board, human against a greedy computer
//!
//! The computer does not search. It keeps, for every 5-cell run on the
//! board, how many stones each side holds there, scores every empty cell
//! from those counters and plays the best one.
//!
//! # Architecture
//!
//! - [`board`]: cell occupancy and turn
//! - [`rules`]: run enumeration and win tracking
//! - [`eval`]: reward table and per-cell scores
//! - [`engine`]: greedy move selection
//! - [`game`]: one match, with move validation
//! - [`session`]: score tally over a key-value store
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Session, Side};
//!
//! let mut session = Session::in_memory();
//! session.human_move(7, 7).unwrap();
//! let reply = session.computer_move().unwrap();
//! assert_eq!(reply.side, Side::Computer);
//! println!("{}", session.tally()); // Player: 0 -- AI: 0
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE, WIN_LENGTH};
pub use engine::{AIEngine, MoveResult, SelectionKind};
pub use error::{MoveError, StoreError};
pub use game::{GameOver, Match, MatchStatus, MoveOutcome};
pub use rules::{RunCount, RunTable, WinTracker, RUN_COUNT};
pub use session::{FileStore, MemoryStore, Session, SessionStore, Tally};
