//! End-to-end checks through the public API
//!
//! Engine expectations are fixed move sequences: the computer is greedy and
//! deterministic, so a given human line always draws the same replies.

use std::sync::Arc;

use gobang::rules::Orientation;
use gobang::session::{record_win, AI_SCORE_KEY, PLAYER_SCORE_KEY};
use gobang::{
    Board, FileStore, Match, MatchStatus, MemoryStore, MoveError, Pos, RunCount, RunTable,
    Session, SessionStore, Side, WinTracker, RUN_COUNT,
};

// =============================================================================
// Helpers
// =============================================================================

/// Play the human's moves in order, letting the computer reply after each.
/// Stops early when the match ends.
fn play(session: &mut Session, human: &[(i32, i32)]) {
    for &(row, col) in human {
        if session.game().is_over() {
            return;
        }
        let outcome = session.human_move(row, col).unwrap();
        if outcome.game_over.is_none() {
            session.computer_move().unwrap();
        }
    }
}

/// The rightmost free cell of the bottom row.
fn bottom_row_move(game: &Match) -> (i32, i32) {
    let pos = game.board().empty_cells().filter(|p| p.row == 14).last().unwrap();
    (pos.row as i32, pos.col as i32)
}

// =============================================================================
// Runs
// =============================================================================

#[test]
fn run_table_covers_every_line_of_five() {
    let runs = RunTable::build();
    assert_eq!(runs.len(), RUN_COUNT);
    assert_eq!(RUN_COUNT, 572);
    assert_eq!(runs.count_by(Orientation::Horizontal), 165);
    assert_eq!(runs.count_by(Orientation::Vertical), 165);
    assert_eq!(runs.count_by(Orientation::DiagonalDown), 121);
    assert_eq!(runs.count_by(Orientation::DiagonalUp), 121);
}

#[test]
fn corner_and_centre_memberships() {
    let runs = RunTable::shared();
    assert_eq!(runs.runs_through(Pos::new(0, 0)).len(), 3);
    assert_eq!(runs.runs_through(Pos::new(14, 14)).len(), 3);
    assert_eq!(runs.runs_through(Pos::new(7, 7)).len(), 20);
}

// =============================================================================
// Win tracking
// =============================================================================

#[test]
fn uninterrupted_row_wins_on_fifth_stone() {
    let runs = RunTable::shared();
    let mut board = Board::new();
    let mut tracker = WinTracker::new(Arc::clone(&runs));

    for col in 7..11 {
        let pos = Pos::new(7, col);
        board.apply_move(pos, Side::Player);
        assert!(!tracker.record_move(pos, Side::Player).game_over);
    }
    let check = tracker.record_move(Pos::new(7, 11), Side::Player);
    board.apply_move(Pos::new(7, 11), Side::Player);

    assert!(check.game_over);
    assert_eq!(check.winner, Some(Side::Player));
    let id = check.winning_run.unwrap();
    assert_eq!(runs.run(id).orientation, Orientation::Horizontal);
    assert_eq!(tracker.count(Side::Player, id), RunCount::Count(5));
    assert_eq!(
        tracker.winning_line(),
        Some([7, 8, 9, 10, 11].map(|col| Pos::new(7, col)))
    );
    assert_eq!(board.stone_count(), 5);
}

#[test]
fn blocked_run_stays_blocked() {
    let mut tracker = WinTracker::new(RunTable::shared());
    tracker.record_move(Pos::new(0, 0), Side::Computer);
    for col in 1..5 {
        tracker.record_move(Pos::new(0, col), Side::Player);
    }
    // Run 0 spans (0,0)..(0,4) and holds a computer stone
    assert_eq!(tracker.count(Side::Player, 0), RunCount::Blocked);
    assert_eq!(tracker.count(Side::Computer, 0), RunCount::Blocked);
    assert!(!tracker.is_game_over());
}

// =============================================================================
// Matches and sessions
// =============================================================================

#[test]
fn computer_reply_to_centre_opening() {
    let mut session = Session::in_memory();
    play(&mut session, &[(7, 7)]);

    let game = session.game();
    assert_eq!(game.last_move(), Some(Pos::new(6, 6)));
    let result = game.last_ai_result().unwrap();
    assert_eq!(result.score.human, 800);
    assert_eq!(result.score.ai, 0);
    assert_eq!(game.current_turn(), Side::Player);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut session = Session::in_memory();
    play(&mut session, &[(7, 7)]);
    let board = session.game().board().clone();
    let counts = session.game().tracker().counts(Side::Player).to_vec();

    assert_eq!(session.human_move(7, 7), Err(MoveError::Occupied(Pos::new(7, 7))));
    assert_eq!(
        session.human_move(15, 3),
        Err(MoveError::OutOfBounds { row: 15, col: 3 })
    );
    assert_eq!(session.game().board(), &board);
    assert_eq!(session.game().tracker().counts(Side::Player), &counts[..]);
    assert_eq!(session.game().move_count(), 2);
}

#[test]
fn computer_win_is_tallied_once_and_survives_new_match() {
    let mut session = Session::in_memory();
    session.human_move(0, 0).unwrap();
    while !session.game().is_over() {
        if session.game().current_turn() == Side::Computer {
            session.computer_move().unwrap();
        } else {
            let (row, col) = bottom_row_move(session.game());
            session.human_move(row, col).unwrap();
        }
    }

    assert_eq!(session.game().status(), MatchStatus::Won(Side::Computer));
    assert_eq!(session.game().last_move(), Some(Pos::new(1, 5)));
    assert_eq!(session.tally().to_string(), "Player: 0 -- AI: 1");
    assert_eq!(session.human_move(7, 7), Err(MoveError::GameOver));
    assert_eq!(session.tally().ai, 1);

    session.new_match();
    let game = session.game();
    assert!(game.board().is_board_empty());
    assert!(game.tracker().counts(Side::Player).iter().all(|&c| c == RunCount::Open));
    assert!(game.tracker().counts(Side::Computer).iter().all(|&c| c == RunCount::Open));
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(session.tally().to_string(), "Player: 0 -- AI: 1");
}

#[test]
fn tally_persists_across_file_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = FileStore::open(&path).unwrap();
    record_win(&mut store, Side::Player).unwrap();
    record_win(&mut store, Side::Computer).unwrap();
    let tally = record_win(&mut store, Side::Player).unwrap();
    assert_eq!(tally.to_string(), "Player: 2 -- AI: 1");

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(PLAYER_SCORE_KEY), Some(2));
    assert_eq!(reopened.get(AI_SCORE_KEY), Some(1));

    let session = Session::new(Box::new(reopened));
    assert_eq!(session.tally().player, 2);
}

#[test]
fn fresh_store_reads_zero() {
    let session = Session::new(Box::new(MemoryStore::new()));
    assert_eq!(session.tally().to_string(), "Player: 0 -- AI: 0");
}
