use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-shape container owning every [`Cell`] of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn neighbors_of(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Neighbors of a position already known to be in bounds.
    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Every position in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn count_mines(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn count_flagged(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    pub(crate) fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| pred(cell)).count() as CellCount
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let grid = Grid::new((3, 4));

        assert!(grid.cell_at((2, 3)).is_ok());
        assert_eq!(
            grid.cell_at((3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            grid.cell_at((0, 4)),
            Err(GameError::OutOfBounds { row: 0, col: 4 })
        );
    }

    #[test]
    fn neighbors_of_corner_and_edge() {
        let grid = Grid::new((3, 3));

        assert_eq!(grid.neighbors_of((0, 0)).unwrap().count(), 3);
        assert_eq!(grid.neighbors_of((0, 1)).unwrap().count(), 5);
        assert_eq!(grid.neighbors_of((1, 1)).unwrap().count(), 8);
        assert!(grid.neighbors_of((5, 5)).is_err());
    }

    #[test]
    fn iter_coords_is_row_major() {
        let grid = Grid::new((2, 3));
        let coords: Vec<_> = grid.iter_coords().collect();

        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn fresh_grid_is_hidden_and_mine_free() {
        let grid = Grid::new((4, 4));

        assert_eq!(grid.total_cells(), 16);
        assert_eq!(grid.count_mines(), 0);
        assert!(grid.iter_coords().all(|pos| grid[pos].is_hidden()));
    }
}
