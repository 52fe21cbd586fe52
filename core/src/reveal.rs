use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

impl GameSession {
    /// Reveals one hidden cell, cascading through zero cells.
    ///
    /// Mines must already be allocated. Every cell that changes is appended to `changed`.
    pub(crate) fn reveal_single_cell(
        &mut self,
        coords: Coord2,
        changed: &mut Vec<Coord2>,
    ) -> RevealOutcome {
        let cell = self.grid[coords];
        if self.state.is_finished() || !cell.is_hidden() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine {
            self.detonate(coords, changed);
            return RevealOutcome::HitMine;
        }

        self.flood_fill_from(coords, changed);

        if self.state.is_cleared() {
            self.finish_won(changed);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals every safe cell reachable from `origin` through zero cells, plus their
    /// numbered border.
    ///
    /// Iterative; the revealed/flagged/mine guard on pop keeps each cell from being
    /// counted twice regardless of visiting order.
    fn flood_fill_from(&mut self, origin: Coord2, changed: &mut Vec<Coord2>) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.grid[coords];
            if !cell.is_hidden() || cell.is_mine {
                continue;
            }

            self.grid[coords].is_revealed = true;
            self.state.record_reveal();
            changed.push(coords);
            log::trace!(
                "Revealed {:?}, adjacent mines: {}",
                coords,
                cell.adjacent_mine_count
            );

            if cell.adjacent_mine_count == 0 {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(coords)
                        .filter(|&pos| self.grid[pos].is_hidden()),
                );
            }
        }
    }

    /// Reveals the mine at `coords`, ends the game, and discloses every other mine.
    ///
    /// Flags on disclosed mines are cleared, a cell is never both revealed and flagged.
    fn detonate(&mut self, coords: Coord2, changed: &mut Vec<Coord2>) {
        self.grid[coords].is_revealed = true;
        changed.push(coords);
        self.state.lose(coords);

        for pos in self.grid.iter_coords() {
            let cell = self.grid[pos];
            if !cell.is_mine || cell.is_revealed {
                continue;
            }
            if cell.is_flagged {
                self.grid[pos].is_flagged = false;
                self.state.record_flag(false);
            }
            self.grid[pos].is_revealed = true;
            changed.push(pos);
        }
    }

    /// Ends the game as won and flags whatever mines are still unmarked.
    fn finish_won(&mut self, changed: &mut Vec<Coord2>) {
        self.state.win();

        for pos in self.grid.iter_coords() {
            let cell = self.grid[pos];
            if cell.is_mine && cell.is_hidden() {
                self.grid[pos].is_flagged = true;
                self.state.record_flag(true);
                changed.push(pos);
            }
        }
    }
}
