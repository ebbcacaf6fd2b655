//! Commonly used types for ease of import.

pub use crate::{CellState, ConfigError, Game, GameConfig, GameStatus, ShipCounts, ShotOutcome};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameApi, GameSession, SessionHandle};
