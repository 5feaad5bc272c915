//! Board structure with turn tracking

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, TOTAL_CELLS};

/// Game board: one bitboard per side plus whose turn it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Human stones
    pub player: Bitboard,
    /// Computer stones
    pub computer: Bitboard,
    turn: Side,
}

impl Board {
    /// Empty board, human to move
    pub fn new() -> Self {
        Self {
            player: Bitboard::new(),
            computer: Bitboard::new(),
            turn: Side::Player,
        }
    }

    /// Get occupancy at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.player.get(pos) {
            Cell::Occupied(Side::Player)
        } else if self.computer.get(pos) {
            Cell::Occupied(Side::Computer)
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.player.get(pos) && !self.computer.get(pos)
    }

    /// Mark a cell as occupied by `side`.
    ///
    /// Callers validate first; placing on an occupied cell is a logic error.
    #[inline]
    pub fn apply_move(&mut self, pos: Pos, side: Side) {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        match side {
            Side::Player => self.player.set(pos),
            Side::Computer => self.computer.set(pos),
        }
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.player.count() + self.computer.count()
    }

    /// Check if board has no stones at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.player.is_empty() && self.computer.is_empty()
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
