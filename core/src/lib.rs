#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use allocator::*;
pub use cell::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod adjacency;
mod allocator;
mod cell;
mod chord;
mod error;
mod grid;
mod reveal;
mod session;
mod snapshot;
mod state;
mod types;

/// Cells in the 3x3 opening neighborhood that never hold a mine.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Builds a config without checking it, for fixed layouts that do not need a safe opening.
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Mines covering `ratio` of the board, rounded down.
    pub fn with_density(rows: Coord, cols: Coord, ratio: f32) -> Result<Self> {
        let mines = (f32::from(mult(rows, cols)) * ratio) as CellCount;
        Self::new(rows, cols, mines)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    /// Requires a non-empty board and `0 < mines < rows * cols - 9`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        if self.mines == 0 {
            return Err(ConfigError::NoMines.into());
        }
        let max = self.max_mines();
        if self.mines > max {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                max,
            }
            .into());
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Largest mine count that still leaves a full safe opening plus one free cell.
    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(SAFE_ZONE_CELLS + 1)
    }
}

/// Whether flagging an untouched board seeds the minefield right away.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagPolicy {
    /// Mines are placed on the first reveal-class action only.
    #[default]
    Deferred,
    /// A flag on an untouched board places mines immediately; the first reveal
    /// then moves any mines out of its safe zone.
    PreSeed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub flag_policy: FlagPolicy,
    pub seed: u64,
}

impl SessionOptions {
    pub const fn new(seed: u64) -> Self {
        Self {
            flag_policy: FlagPolicy::Deferred,
            seed,
        }
    }

    pub const fn with_flag_policy(mut self, flag_policy: FlagPolicy) -> Self {
        self.flag_policy = flag_policy;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Used to merge outcomes of a batch of reveals
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Everything a reveal-class action changed, plus the phase it left the game in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    pub cells_changed: Vec<CellView>,
    pub phase: Phase,
}

impl RevealResult {
    pub fn unchanged(phase: Phase) -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            cells_changed: Vec::new(),
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 10, 5),
            Err(GameError::InvalidConfig(ConfigError::EmptyBoard))
        );
        assert_eq!(
            GameConfig::new(10, 0, 5),
            Err(GameError::InvalidConfig(ConfigError::EmptyBoard))
        );
    }

    #[test]
    fn config_rejects_zero_mines() {
        assert_eq!(
            GameConfig::new(5, 5, 0),
            Err(GameError::InvalidConfig(ConfigError::NoMines))
        );
    }

    #[test]
    fn config_requires_room_for_safe_opening() {
        // 5x5 leaves 16 cells outside a full opening, one must stay free
        assert!(GameConfig::new(5, 5, 15).is_ok());
        assert_eq!(
            GameConfig::new(5, 5, 16),
            Err(GameError::InvalidConfig(ConfigError::TooManyMines {
                mines: 16,
                max: 15
            }))
        );
        assert!(GameConfig::new(3, 3, 1).is_err());
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn density_rounds_down() {
        let config = GameConfig::with_density(25, 50, 0.15).unwrap();

        assert_eq!(config.mines, 187);
        assert_eq!(config.total_cells(), 1250);
    }

    #[test]
    fn outcome_merge_prefers_mine_then_win() {
        use RevealOutcome::*;

        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
    }
}
