use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::*;

/// Neighborhood of a revealed number, read in one pass before any mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
struct NeighborCensus {
    clue: u8,
    flagged: u8,
    hidden: SmallVec<[Coord2; 8]>,
}

impl NeighborCensus {
    /// Flags already account for every mine the clue announces.
    fn is_satisfied(&self) -> bool {
        self.flagged == self.clue
    }

    /// Every remaining hidden neighbor must be a mine.
    fn forces_flags(&self) -> bool {
        match self.clue.checked_sub(self.flagged) {
            Some(need) => need > 0 && usize::from(need) == self.hidden.len(),
            None => false,
        }
    }
}

impl GameSession {
    /// Reveals every hidden, unflagged neighbor of a revealed number whose flag count
    /// matches it exactly.
    ///
    /// A misplaced flag means one of those neighbors is a mine: the batch stops there
    /// and the game is lost.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(self.unchanged());
        }
        let Some(census) = self.census(coords) else {
            return Ok(self.unchanged());
        };
        if !census.is_satisfied() {
            return Ok(self.unchanged());
        }

        let mut changed = Vec::new();
        let mut outcome = RevealOutcome::NoChange;
        for pos in census.hidden {
            // an earlier neighbor's cascade may already have reached this one
            let step = self.reveal_single_cell(pos, &mut changed);
            outcome = outcome | step;
            if matches!(step, RevealOutcome::HitMine | RevealOutcome::Won) {
                break;
            }
        }

        log::debug!("Chord reveal at {:?}: {:?}", coords, outcome);
        Ok(self.result(outcome, changed))
    }

    /// Flags every hidden neighbor of a revealed number when the number leaves no
    /// other choice. Never reveals anything.
    pub fn chord_flag(&mut self, coords: Coord2) -> Result<Vec<FlagChange>> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(Vec::new());
        }
        let Some(census) = self.census(coords) else {
            return Ok(Vec::new());
        };
        if !census.forces_flags() {
            return Ok(Vec::new());
        }

        log::debug!("Chord flag at {:?}: {:?}", coords, census.hidden);
        Ok(census
            .hidden
            .into_iter()
            .map(|pos| {
                self.grid[pos].is_flagged = true;
                self.state.record_flag(true);
                FlagChange::new(pos, true)
            })
            .collect())
    }

    pub fn can_chord_reveal_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(!self.state.is_finished()
            && self
                .census(coords)
                .is_some_and(|census| census.is_satisfied() && !census.hidden.is_empty()))
    }

    pub fn can_chord_flag_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.grid.validate_coords(coords)?;
        Ok(!self.state.is_finished()
            && self
                .census(coords)
                .is_some_and(|census| census.forces_flags()))
    }

    /// `None` unless `coords` is a revealed number.
    fn census(&self, coords: Coord2) -> Option<NeighborCensus> {
        let cell = self.grid[coords];
        if !cell.is_revealed_number() {
            return None;
        }

        let mut flagged = 0;
        let mut hidden = SmallVec::new();
        for pos in self.grid.iter_neighbors(coords) {
            let neighbor = self.grid[pos];
            if neighbor.is_flagged {
                flagged += 1;
            } else if !neighbor.is_revealed {
                hidden.push(pos);
            }
        }

        Some(NeighborCensus {
            clue: cell.adjacent_mine_count,
            flagged,
            hidden,
        })
    }
}
