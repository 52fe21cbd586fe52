use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Pending -> Active, when mines are allocated
/// - Active -> Won, when the last safe cell is revealed
/// - Active -> Lost, when a mine is revealed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No mines placed yet
    #[default]
    Pending,
    /// Mines placed, game in progress
    Active,
    /// Every safe cell revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl Phase {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Won and Lost accept no further moves.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Progress counters and phase of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: Phase,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    safe_cell_count: CellCount,
    mines_allocated: bool,
    opening_secured: bool,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn mines_allocated(&self) -> bool {
        self.mines_allocated
    }

    pub fn opening_secured(&self) -> bool {
        self.opening_secured
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Records a completed allocation and starts the game.
    pub(crate) fn mark_allocated(&mut self, safe_cell_count: CellCount, opening_secured: bool) {
        self.mines_allocated = true;
        self.opening_secured = opening_secured;
        self.safe_cell_count = safe_cell_count;
        if self.phase.is_pending() {
            log::debug!("Mines allocated, {} safe cells to reveal", safe_cell_count);
            self.phase = Phase::Active;
        }
    }

    pub(crate) fn mark_opening_secured(&mut self) {
        self.opening_secured = true;
    }

    pub(crate) fn record_reveal(&mut self) {
        self.revealed_count += 1;
    }

    pub(crate) fn record_flag(&mut self, flagged: bool) {
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
    }

    pub(crate) fn is_cleared(&self) -> bool {
        self.mines_allocated && self.revealed_count.0 >= self.safe_cell_count
    }

    pub(crate) fn win(&mut self) {
        if self.phase.is_finished() {
            return;
        }
        log::debug!("Won after revealing {} cells", self.revealed_count);
        self.phase = Phase::Won;
    }

    pub(crate) fn lose(&mut self, coords: Coord2) {
        if self.phase.is_finished() {
            return;
        }
        log::debug!("Lost on mine at {:?}", coords);
        self.triggered_mine = Some(coords);
        self.phase = Phase::Lost;
    }
}
