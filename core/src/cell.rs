use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Canonical state of one grid position.
///
/// `adjacent_mine_count` is only meaningful once mines have been allocated,
/// and stays 0 on mine cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mine_count: u8,
}

impl Cell {
    /// Hidden and not flagged, the only state a reveal can act on.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// A revealed safe cell with at least one neighboring mine.
    pub const fn is_revealed_number(self) -> bool {
        self.is_revealed && !self.is_mine && self.adjacent_mine_count > 0
    }
}

/// A cell together with its position, as reported back to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: u8,
    pub col: u8,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mine_count: u8,
}

impl CellView {
    pub const fn new((row, col): Coord2, cell: Cell) -> Self {
        Self {
            row,
            col,
            is_mine: cell.is_mine,
            is_revealed: cell.is_revealed,
            is_flagged: cell.is_flagged,
            adjacent_mine_count: cell.adjacent_mine_count,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }
}

/// Flag state of a single cell after a flag action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagChange {
    pub row: u8,
    pub col: u8,
    pub is_flagged: bool,
}

impl FlagChange {
    pub const fn new((row, col): Coord2, is_flagged: bool) -> Self {
        Self {
            row,
            col,
            is_flagged,
        }
    }
}
