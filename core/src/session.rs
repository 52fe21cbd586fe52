use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::*;

/// One game: the grid, its progress, and the allocator that seeds it.
#[derive(Debug)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) flag_policy: FlagPolicy,
    pub(crate) grid: Grid,
    pub(crate) state: GameState,
    allocator: Box<dyn MineAllocator>,
}

impl GameSession {
    /// Starts a game with randomly placed mines.
    pub fn new(config: GameConfig, options: SessionOptions) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_allocator(
            config,
            options.flag_policy,
            Box::new(RandomAllocator::new(options.seed)),
        ))
    }

    /// Starts a game whose mines sit exactly at `mines`.
    pub fn from_layout(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let off_board = mines
            .iter()
            .find(|&&(row, col)| row >= rows || col >= cols);
        if let Some(&(row, col)) = off_board {
            return Err(GameError::OutOfBounds { row, col });
        }
        let allocator = FixedAllocator::new(mines.iter().copied());
        let config = GameConfig::new_unchecked(rows, cols, allocator.mines().len() as CellCount);
        Ok(Self::with_allocator(config, FlagPolicy::Deferred, Box::new(allocator)))
    }

    /// Starts a game with a caller-provided allocator; `config` is taken as is.
    pub fn with_allocator(
        config: GameConfig,
        flag_policy: FlagPolicy,
        allocator: Box<dyn MineAllocator>,
    ) -> Self {
        Self {
            config,
            flag_policy,
            grid: Grid::new(config.size()),
            state: GameState::default(),
            allocator,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.grid.cell_at(coords)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.state.revealed_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.state.flagged_count()
    }

    /// Configured mines minus placed flags; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.state.flagged_count() as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.state.triggered_mine()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Back to a fresh, unseeded board with the same configuration.
    pub fn restart(&mut self) {
        log::debug!(
            "Restarting {}x{} game with {} mines",
            self.config.rows,
            self.config.cols,
            self.config.mines
        );
        self.grid = Grid::new(self.config.size());
        self.state = GameState::default();
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_finished() || !self.grid[coords].is_hidden() {
            return Ok(self.unchanged());
        }

        self.secure_opening(coords)?;
        let mut changed = Vec::new();
        let outcome = self.reveal_single_cell(coords, &mut changed);
        Ok(self.result(outcome, changed))
    }

    /// Reveals a hidden cell, or chords a revealed number.
    pub fn open(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.grid.validate_coords(coords)?;

        if self.grid[coords].is_revealed {
            self.chord_reveal(coords)
        } else {
            self.reveal(coords)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagChange> {
        let coords = self.grid.validate_coords(coords)?;
        let cell = self.grid[coords];

        if self.state.is_finished() || cell.is_revealed {
            return Ok(FlagChange::new(coords, cell.is_flagged));
        }

        if matches!(self.flag_policy, FlagPolicy::PreSeed) && !self.state.mines_allocated() {
            self.allocate(&SafeZone::empty())?;
        }

        let flagged = !cell.is_flagged;
        self.grid[coords].is_flagged = flagged;
        self.state.record_flag(flagged);
        log::trace!("Flag at {:?} set to {}", coords, flagged);
        Ok(FlagChange::new(coords, flagged))
    }

    /// Allocates mines around the first reveal, or moves pre-seeded mines out of its way.
    fn secure_opening(&mut self, opening: Coord2) -> Result<()> {
        if self.state.opening_secured() {
            return Ok(());
        }

        let zone = SafeZone::around(&self.grid, opening);
        if self.state.mines_allocated() {
            self.allocator.relocate(&mut self.grid, &zone)?;
            compute_adjacency(&mut self.grid);
            self.state.mark_opening_secured();
            Ok(())
        } else {
            self.allocate(&zone)
        }
    }

    fn allocate(&mut self, exclusion: &SafeZone) -> Result<()> {
        self.allocator
            .place(&mut self.grid, self.config.mines, exclusion)?;
        compute_adjacency(&mut self.grid);

        let safe_cell_count = self.grid.total_cells() - self.grid.count_mines();
        self.state.mark_allocated(safe_cell_count, !exclusion.is_empty());
        Ok(())
    }

    pub(crate) fn unchanged(&self) -> RevealResult {
        RevealResult::unchanged(self.phase())
    }

    pub(crate) fn result(&self, outcome: RevealOutcome, changed: Vec<Coord2>) -> RevealResult {
        RevealResult {
            outcome,
            cells_changed: changed
                .into_iter()
                .map(|coords| CellView::new(coords, self.grid[coords]))
                .collect(),
            phase: self.phase(),
        }
    }
}
