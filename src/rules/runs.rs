//! Run enumeration: every 5-cell line that fits on the board
//!
//! A run is a fixed set of `WIN_LENGTH` in-line cells. Holding all of them
//! wins the match. The table is built once and shared by every match.

use std::sync::{Arc, OnceLock};

use crate::board::{Pos, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};

/// Number of valid starting offsets along one axis
const STARTS: usize = BOARD_SIZE - WIN_LENGTH + 1; // 11

/// Total number of runs on the board
pub const RUN_COUNT: usize = 2 * BOARD_SIZE * STARTS + 2 * STARTS * STARTS; // 572

/// Stable run identifier, assigned in discovery order
pub type RunId = u16;

/// Direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Towards the bottom-right
    DiagonalDown,
    /// Towards the bottom-left
    DiagonalUp,
}

impl Orientation {
    /// Enumeration order; run ids are orientation-major
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];
}

/// Five in-bounds cells along one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub orientation: Orientation,
    pub cells: [Pos; WIN_LENGTH],
}

impl Run {
    fn from_start(orientation: Orientation, row: usize, col: usize) -> Self {
        let cells = std::array::from_fn(|k| {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + k),
                Orientation::Vertical => (row + k, col),
                Orientation::DiagonalDown => (row + k, col + k),
                Orientation::DiagonalUp => (row + k, col - k),
            };
            Pos::new(r as u8, c as u8)
        });
        Self { orientation, cells }
    }

    /// Check whether the run covers `pos`
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// All runs plus the reverse cell -> runs index
#[derive(Debug, Clone)]
pub struct RunTable {
    runs: Vec<Run>,
    by_cell: Vec<Vec<RunId>>,
}

impl RunTable {
    /// Enumerate every run on the board.
    ///
    /// Starts are visited so that all five cells stay in bounds:
    /// horizontal rows 0..15 x cols 0..11, vertical cols 0..15 x rows 0..11,
    /// diagonal-down rows 0..11 x cols 0..11, diagonal-up rows 0..11 x cols
    /// 14 down to 4.
    pub fn build() -> Self {
        let mut runs = Vec::with_capacity(RUN_COUNT);

        for orientation in Orientation::ALL {
            match orientation {
                Orientation::Horizontal => {
                    for row in 0..BOARD_SIZE {
                        for col in 0..STARTS {
                            runs.push(Run::from_start(orientation, row, col));
                        }
                    }
                }
                Orientation::Vertical => {
                    for col in 0..BOARD_SIZE {
                        for row in 0..STARTS {
                            runs.push(Run::from_start(orientation, row, col));
                        }
                    }
                }
                Orientation::DiagonalDown => {
                    for row in 0..STARTS {
                        for col in 0..STARTS {
                            runs.push(Run::from_start(orientation, row, col));
                        }
                    }
                }
                Orientation::DiagonalUp => {
                    for row in 0..STARTS {
                        for col in (WIN_LENGTH - 1..BOARD_SIZE).rev() {
                            runs.push(Run::from_start(orientation, row, col));
                        }
                    }
                }
            }
        }

        let mut by_cell = vec![Vec::new(); TOTAL_CELLS];
        for (id, run) in runs.iter().enumerate() {
            for cell in run.cells {
                by_cell[cell.to_index()].push(id as RunId);
            }
        }

        debug_assert_eq!(runs.len(), RUN_COUNT);
        Self { runs, by_cell }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> Arc<RunTable> {
        static TABLE: OnceLock<Arc<RunTable>> = OnceLock::new();
        TABLE.get_or_init(|| Arc::new(RunTable::build())).clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[inline]
    pub fn run(&self, id: RunId) -> &Run {
        &self.runs[id as usize]
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Run ids passing through `pos`, ascending
    #[inline]
    pub fn runs_through(&self, pos: Pos) -> &[RunId] {
        &self.by_cell[pos.to_index()]
    }

    /// Number of runs with the given orientation
    pub fn count_by(&self, orientation: Orientation) -> usize {
        self.runs.iter().filter(|run| run.orientation == orientation).count()
    }
}

impl Default for RunTable {
    fn default() -> Self {
        Self::build()
    }
}
