use log::{debug, info, warn};
use rand::Rng;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    common::{ConfigError, ShotError},
    config::{GameConfig, ShipCounts},
    grid::{CellState, Grid},
    placement::{place_fleet, PlacementReport},
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    Loading,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` are terminal.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Result of a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The shot finished off the ship at this index of [`Game::ships`].
    Destroyed { ship: usize },
}

impl ShotOutcome {
    pub fn is_destroyed(self) -> bool {
        matches!(self, ShotOutcome::Destroyed { .. })
    }
}

/// Owned copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub grid_side: usize,
    pub cells: Vec<CellState>,
    pub remaining_shots: u32,
    pub status: GameStatus,
    pub ships_remaining: usize,
}

/// Single-player game: a grid with hidden ships and a limited number of shots.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    ships: Vec<Ship>,
    remaining_shots: u32,
    status: GameStatus,
    placement: PlacementReport,
}

impl Game {
    /// Validate `config` and place the fleet using `rng`.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            grid: Grid::new(config.grid_side),
            ships: Vec::new(),
            remaining_shots: config.shot_budget,
            status: GameStatus::Loading,
            placement: PlacementReport::default(),
            config,
        };
        game.deploy(rng);
        Ok(game)
    }

    /// Shorthand for [`Game::new`] with the default placement order.
    pub fn with_rng<R: Rng>(
        shot_budget: u32,
        grid_side: usize,
        ship_counts: impl Into<ShipCounts>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::new(GameConfig::new(shot_budget, grid_side, ship_counts), rng)
    }

    /// Start over with a fresh layout and the full shot budget.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.grid.clear();
        self.remaining_shots = self.config.shot_budget;
        self.status = GameStatus::Loading;
        self.deploy(rng);
    }

    fn deploy<R: Rng>(&mut self, rng: &mut R) {
        let (ships, report) = place_fleet(
            &mut self.grid,
            &self.config.ship_counts,
            self.config.placement_order,
            rng,
        );
        self.ships = ships;
        self.placement = report;
        self.status = GameStatus::InProgress;
        info!(
            "new game: {}x{} grid, {} of {} ships placed, {} shots",
            self.grid.side(),
            self.grid.side(),
            report.placed,
            report.requested,
            self.remaining_shots
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_side(&self) -> usize {
        self.grid.side()
    }

    /// Read-only view of every cell state, row-major.
    pub fn cell_states(&self) -> &[CellState] {
        self.grid.cells()
    }

    pub fn remaining_shots(&self) -> u32 {
        self.remaining_shots
    }

    pub fn shot_budget(&self) -> u32 {
        self.config.shot_budget
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Number of ships the configuration asked for. May exceed
    /// `ships().len()` when some did not fit.
    pub fn requested_ships(&self) -> usize {
        self.placement.requested
    }

    pub fn placement_report(&self) -> PlacementReport {
        self.placement
    }

    /// `true` while the game is running and `cell` has not been shot.
    ///
    /// # Panics
    /// If `cell` is outside the grid.
    pub fn can_be_shot(&self, cell: usize) -> bool {
        let state = self.grid.get(cell);
        self.status == GameStatus::InProgress && !state.is_shot()
    }

    /// Apply a shot at `cell` and report whether it destroyed a ship.
    ///
    /// Ineligible cells are ignored and reported as `false`.
    ///
    /// # Panics
    /// If `cell` is outside the grid.
    pub fn apply_shot(&mut self, cell: usize) -> bool {
        if !self.can_be_shot(cell) {
            warn!(
                "ignoring shot at cell {} ({:?}, game {:?})",
                cell,
                self.grid.get(cell),
                self.status
            );
            return false;
        }
        self.resolve(cell).is_destroyed()
    }

    /// Checked shot: refuses out-of-range cells, repeated shots and shots
    /// after the game has ended.
    pub fn fire(&mut self, cell: usize) -> Result<ShotOutcome, ShotError> {
        if cell >= self.grid.len() {
            return Err(ShotError::OutOfRange {
                cell,
                cells: self.grid.len(),
            });
        }
        if self.status != GameStatus::InProgress {
            return Err(ShotError::GameOver(self.status));
        }
        let state = self.grid.get(cell);
        if state.is_shot() {
            return Err(ShotError::AlreadyShot { cell, state });
        }
        Ok(self.resolve(cell))
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_side: self.grid.side(),
            cells: self.grid.cells().to_vec(),
            remaining_shots: self.remaining_shots,
            status: self.status,
            ships_remaining: self.ships_remaining(),
        }
    }

    fn resolve(&mut self, cell: usize) -> ShotOutcome {
        self.remaining_shots = self.remaining_shots.saturating_sub(1);
        let outcome = if self.grid.get(cell) == CellState::Ship {
            self.grid.set(cell, CellState::Hit);
            self.check_destruction(cell)
        } else {
            self.grid.set(cell, CellState::Miss);
            ShotOutcome::Miss
        };
        debug!(
            "shot at {:?}: {:?}, {} shots left",
            self.grid.position(cell),
            outcome,
            self.remaining_shots
        );

        // a winning last shot has already set `Won` above
        if self.status == GameStatus::InProgress && self.remaining_shots == 0 {
            self.status = GameStatus::Lost;
            info!("out of shots, game lost");
        }
        outcome
    }

    /// Destroy the ship owning `cell` when all of its cells are hit.
    fn check_destruction(&mut self, cell: usize) -> ShotOutcome {
        let Some(index) = self.ships.iter().position(|s| s.contains(cell)) else {
            return ShotOutcome::Hit;
        };
        let grid = &mut self.grid;
        let ship = &mut self.ships[index];
        if !ship.cells().iter().all(|&c| grid.get(c) == CellState::Hit) {
            return ShotOutcome::Hit;
        }

        ship.destroy();
        for &c in ship.cells() {
            grid.set(c, CellState::Destroyed);
        }
        debug!("ship {} destroyed: {:?}", index, ship);

        if self.ships.iter().all(Ship::is_destroyed) {
            self.status = GameStatus::Won;
            info!(
                "all ships destroyed with {} shots left, game won",
                self.remaining_shots
            );
        }
        ShotOutcome::Destroyed { ship: index }
    }
}
