use crate::*;

/// Fills in `adjacent_mine_count` for every safe cell; mine cells get 0.
pub fn compute_adjacency(grid: &mut Grid) {
    for coords in grid.iter_coords() {
        let count = if grid[coords].is_mine {
            0
        } else {
            grid.iter_neighbors(coords)
                .filter(|&pos| grid[pos].is_mine)
                .count() as u8
        };
        grid[coords].adjacent_mine_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_mines(size: Coord2, mines: &[Coord2]) -> Grid {
        let mut grid = Grid::new(size);
        for &coords in mines {
            grid[coords].is_mine = true;
        }
        grid
    }

    #[test]
    fn counts_neighboring_mines() {
        let mut grid = grid_with_mines((3, 3), &[(0, 0), (2, 2)]);

        compute_adjacency(&mut grid);

        assert_eq!(grid[(1, 1)].adjacent_mine_count, 2);
        assert_eq!(grid[(0, 1)].adjacent_mine_count, 1);
        assert_eq!(grid[(0, 2)].adjacent_mine_count, 0);
        assert_eq!(grid[(2, 1)].adjacent_mine_count, 1);
    }

    #[test]
    fn mine_cells_stay_zero() {
        let mut grid = grid_with_mines((2, 2), &[(0, 0), (0, 1), (1, 0)]);

        compute_adjacency(&mut grid);

        assert_eq!(grid[(0, 0)].adjacent_mine_count, 0);
        assert_eq!(grid[(1, 1)].adjacent_mine_count, 3);
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let mut grid = Grid::new((3, 3));
        for coords in grid.iter_coords() {
            grid[coords].is_mine = coords != (1, 1);
        }

        compute_adjacency(&mut grid);

        assert_eq!(grid[(1, 1)].adjacent_mine_count, 8);
    }

    #[test]
    fn recomputing_is_stable() {
        let mut grid = grid_with_mines((4, 5), &[(1, 1), (3, 4), (0, 4)]);

        compute_adjacency(&mut grid);
        let first = grid.clone();
        compute_adjacency(&mut grid);

        assert_eq!(grid, first);
    }
}
