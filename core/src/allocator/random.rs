use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Sampling attempts allowed per board cell before placement gives up.
const ATTEMPTS_PER_CELL: u32 = 1024;

/// Uniform rejection sampling: draw random cells, skip the excluded or already
/// mined ones, until enough mines are placed.
#[derive(Clone, Debug)]
pub struct RandomAllocator {
    rng: SmallRng,
}

impl RandomAllocator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws `count` distinct cells for which `blocked` is false.
    ///
    /// Nothing is written to the grid here, so a failed draw leaves it as it was.
    fn draw(
        &mut self,
        size: Coord2,
        count: usize,
        blocked: impl Fn(Coord2) -> bool,
    ) -> Result<Vec<Coord2>> {
        let (rows, cols) = size;
        let budget = u32::from(mult(rows, cols)).saturating_mul(ATTEMPTS_PER_CELL);
        let mut taken: Array2<bool> = Array2::default(size.to_nd_index());
        let mut picked = Vec::with_capacity(count);
        let mut attempts = 0;

        while picked.len() < count {
            if attempts >= budget {
                log::warn!(
                    "Mine placement exhausted after {} attempts, placed {} of {}",
                    attempts,
                    picked.len(),
                    count
                );
                return Err(ConfigError::PlacementExhausted { attempts }.into());
            }
            attempts += 1;

            let coords = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            if blocked(coords) || taken[coords.to_nd_index()] {
                continue;
            }
            taken[coords.to_nd_index()] = true;
            picked.push(coords);
        }

        log::trace!("Drew {} cells in {} attempts", count, attempts);
        Ok(picked)
    }
}

impl MineAllocator for RandomAllocator {
    fn place(&mut self, grid: &mut Grid, mines: CellCount, exclusion: &SafeZone) -> Result<()> {
        let picked = self.draw(grid.size(), mines.into(), |coords| {
            exclusion.contains(coords) || grid[coords].is_mine
        })?;

        for coords in picked {
            grid[coords].is_mine = true;
        }
        Ok(())
    }

    fn relocate(&mut self, grid: &mut Grid, zone: &SafeZone) -> Result<()> {
        let displaced: SmallVec<[Coord2; 9]> =
            zone.iter().filter(|&coords| grid[coords].is_mine).collect();
        if displaced.is_empty() {
            return Ok(());
        }

        let picked = self.draw(grid.size(), displaced.len(), |coords| {
            zone.contains(coords) || grid[coords].is_mine
        })?;

        log::debug!(
            "Moving {} mines out of the opening: {:?} -> {:?}",
            displaced.len(),
            displaced,
            picked
        );
        for coords in displaced {
            grid[coords].is_mine = false;
        }
        for coords in picked {
            grid[coords].is_mine = true;
        }
        Ok(())
    }
}
