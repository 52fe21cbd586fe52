use alloc::vec::Vec;

use super::*;

/// Places mines at a predetermined set of coordinates.
///
/// The layout is trusted as given: it is not checked against the opening's
/// safe zone and is never relocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedAllocator {
    mines: Vec<Coord2>,
}

impl FixedAllocator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        let mut mines: Vec<_> = mines.into_iter().collect();
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MineAllocator for FixedAllocator {
    fn place(&mut self, grid: &mut Grid, mines: CellCount, _exclusion: &SafeZone) -> Result<()> {
        for &coords in &self.mines {
            grid.validate_coords(coords)?;
        }
        if self.mines.len() != usize::from(mines) {
            log::warn!(
                "Fixed layout has {} mines but {} were requested",
                self.mines.len(),
                mines
            );
        }
        for &coords in &self.mines {
            grid[coords].is_mine = true;
        }
        Ok(())
    }

    fn relocate(&mut self, _grid: &mut Grid, _zone: &SafeZone) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_given_cells() {
        let mut grid = Grid::new((3, 3));
        let mut allocator = FixedAllocator::new([(0, 1), (2, 2), (0, 1)]);

        allocator.place(&mut grid, 2, &SafeZone::empty()).unwrap();

        assert_eq!(grid.count_mines(), 2);
        assert!(grid[(0, 1)].is_mine);
        assert!(grid[(2, 2)].is_mine);
    }

    #[test]
    fn out_of_bounds_layout_is_rejected_before_placing() {
        let mut grid = Grid::new((3, 3));
        let mut allocator = FixedAllocator::new([(0, 0), (3, 1)]);

        let err = allocator.place(&mut grid, 2, &SafeZone::empty());

        assert_eq!(err, Err(GameError::OutOfBounds { row: 3, col: 1 }));
        assert_eq!(grid.count_mines(), 0);
    }
}
