//! Common types for the sea battle engine: configuration and shot errors.

use crate::game::GameStatus;
use crate::grid::CellState;

/// Errors returned when a game cannot be built from its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The ship histogram is empty or requests no ship at all.
    NoShips,
    /// The histogram describes ships longer than a grid side.
    ShipsTooLarge { longest: usize, grid_side: usize },
    /// More ship cells were requested than the grid holds.
    TooManyShipCells { requested: usize, available: usize },
    /// A textual histogram had an unparsable entry at `position`.
    InvalidShipCounts { position: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoShips => write!(f, "Can't create a game without ships"),
            ConfigError::ShipsTooLarge { longest, grid_side } => write!(
                f,
                "Ships can't be larger than the grid: size {} on a {}x{} grid",
                longest, grid_side, grid_side
            ),
            ConfigError::TooManyShipCells {
                requested,
                available,
            } => write!(
                f,
                "Too many ships for the grid: {} ship cells requested, {} available",
                requested, available
            ),
            ConfigError::InvalidShipCounts { position } => {
                write!(f, "Invalid ship count at position {}", position)
            }
        }
    }
}

/// Reasons a checked shot is refused before it touches the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Cell id lies outside `[0, cells)`.
    OutOfRange { cell: usize, cells: usize },
    /// Cell was already shot and now holds `state`.
    AlreadyShot { cell: usize, state: CellState },
    /// Game is not accepting shots.
    GameOver(GameStatus),
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::OutOfRange { cell, cells } => {
                write!(f, "Cell {} is out of range (grid has {} cells)", cell, cells)
            }
            ShotError::AlreadyShot { cell, state } => {
                write!(f, "Cell {} was already shot ({:?})", cell, state)
            }
            ShotError::GameOver(status) => write!(f, "Game does not accept shots ({:?})", status),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
