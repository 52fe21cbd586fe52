use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, requested {mines} but at most {max} fit around a safe opening")]
    TooManyMines { mines: CellCount, max: CellCount },
    #[error("Mine placement gave up after {attempts} attempts")]
    PlacementExhausted { attempts: u32 },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Coordinates ({row}, {col}) are out of bounds")]
    OutOfBounds { row: Coord, col: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
