use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of a session for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub phase: Phase,
    pub cells: Array2<Cell>,
    pub revealed_count: CellCount,
    pub flagged_count: CellCount,
    /// Configured mines minus placed flags.
    pub mines_left: isize,
    pub triggered_mine: Option<Coord2>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            config: session.config(),
            phase: session.phase(),
            cells: session.grid().cells().clone(),
            revealed_count: session.revealed_count(),
            flagged_count: session.flagged_count(),
            mines_left: session.mines_left(),
            triggered_mine: session.triggered_mine(),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(self.cells[coords.to_nd_index()])
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    /// Cells in row-major order.
    pub fn iter_views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| CellView::new((row as Coord, col as Coord), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_maps_revealed_and_flagged_cells() {
        let mut session = GameSession::from_layout((2, 2), &[(0, 0)]).unwrap();

        session.reveal((1, 1)).unwrap();
        session.toggle_flag((0, 1)).unwrap();

        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, Phase::Active);
        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.revealed_count, 1);
        assert_eq!(snapshot.cell_at((1, 1)).unwrap().adjacent_mine_count, 1);
        assert!(snapshot.cell_at((0, 1)).unwrap().is_flagged);
        assert!(snapshot.cell_at((2, 0)).is_err());
    }

    #[test]
    fn snapshot_is_detached_from_session() {
        let mut session = GameSession::from_layout((3, 3), &[(0, 0)]).unwrap();
        let before = session.snapshot();

        session.reveal((2, 2)).unwrap();

        assert_eq!(before.phase, Phase::Pending);
        assert!(before.iter_views().all(|view| !view.is_revealed));
        assert_eq!(session.snapshot().phase, Phase::Won);
    }

    #[test]
    fn over_flagging_goes_negative() {
        let mut session = GameSession::from_layout((3, 3), &[(0, 0)]).unwrap();

        session.toggle_flag((0, 0)).unwrap();
        session.toggle_flag((2, 2)).unwrap();

        assert_eq!(session.snapshot().mines_left, -1);
    }

    #[test]
    fn iter_views_is_row_major() {
        let session = GameSession::from_layout((2, 3), &[(1, 2)]).unwrap();
        let coords: alloc::vec::Vec<_> = session
            .snapshot()
            .iter_views()
            .map(|view| view.coords())
            .collect();

        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut session = GameSession::from_layout((3, 3), &[(0, 0)]).unwrap();
        session.reveal((0, 1)).unwrap();

        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshot);
    }
}
