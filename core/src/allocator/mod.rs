use core::fmt;
use smallvec::SmallVec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Places mines on a [`Grid`] while keeping a [`SafeZone`] clear.
///
/// Implementations must leave the grid untouched when they return an error.
pub trait MineAllocator: fmt::Debug {
    /// Places `mines` mines on a grid that has none, none of them inside `exclusion`.
    fn place(&mut self, grid: &mut Grid, mines: CellCount, exclusion: &SafeZone) -> Result<()>;

    /// Moves every mine inside `zone` to a free cell outside it, keeping the mine count.
    fn relocate(&mut self, grid: &mut Grid, zone: &SafeZone) -> Result<()>;
}

/// The opening cell and its in-bounds neighbors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SafeZone {
    cells: SmallVec<[Coord2; 9]>,
}

impl SafeZone {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 3x3 block centered on `center`, clamped to the grid.
    pub fn around(grid: &Grid, center: Coord2) -> Self {
        let mut cells = SmallVec::new();
        cells.push(center);
        cells.extend(grid.iter_neighbors(center));
        Self { cells }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells.iter().copied()
    }
}
