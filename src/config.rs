//! Game configuration: grid side, shot budget and the ship histogram.

use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::ConfigError;

pub const DEFAULT_GRID_SIDE: usize = 10;
pub const DEFAULT_SHOT_BUDGET: u32 = 80;
/// Ships per size, starting with size 1.
pub const DEFAULT_SHIP_COUNTS: [usize; 6] = [5, 3, 2, 1, 1, 1];

/// Order in which requested ships are handed to the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementOrder {
    #[default]
    SmallestFirst,
    LargestFirst,
}

/// Number of ships requested per size: `counts[k]` ships of size `k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct ShipCounts(Vec<usize>);

impl ShipCounts {
    pub fn new(counts: Vec<usize>) -> Self {
        Self(counts)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Largest representable ship size, i.e. the histogram length.
    pub fn longest(&self) -> usize {
        self.0.len()
    }

    pub fn total_ships(&self) -> usize {
        self.0.iter().sum()
    }

    /// Total cells all requested ships would occupy, `None` on overflow.
    pub fn total_cells(&self) -> Option<usize> {
        self.0.iter().enumerate().try_fold(0usize, |acc, (k, &n)| {
            n.checked_mul(k + 1).and_then(|cells| acc.checked_add(cells))
        })
    }

    /// Sizes of every requested ship, one entry per ship.
    pub fn sizes(&self, order: PlacementOrder) -> impl Iterator<Item = usize> + '_ {
        let longest = self.longest();
        (0..longest).flat_map(move |i| {
            let k = match order {
                PlacementOrder::SmallestFirst => i,
                PlacementOrder::LargestFirst => longest - 1 - i,
            };
            core::iter::repeat(k + 1).take(self.0[k])
        })
    }
}

impl From<Vec<usize>> for ShipCounts {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}

impl From<&[usize]> for ShipCounts {
    fn from(counts: &[usize]) -> Self {
        Self(counts.to_vec())
    }
}

impl Default for ShipCounts {
    fn default() -> Self {
        Self::from(&DEFAULT_SHIP_COUNTS[..])
    }
}

/// Parses the comma separated form used by settings files: `"5,3,2,1,1,1"`.
impl FromStr for ShipCounts {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .enumerate()
            .map(|(position, part)| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidShipCounts { position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Everything needed to build a [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub shot_budget: u32,
    pub grid_side: usize,
    pub ship_counts: ShipCounts,
    pub placement_order: PlacementOrder,
}

impl GameConfig {
    pub fn new(shot_budget: u32, grid_side: usize, ship_counts: impl Into<ShipCounts>) -> Self {
        Self {
            shot_budget,
            grid_side,
            ship_counts: ship_counts.into(),
            placement_order: PlacementOrder::default(),
        }
    }

    pub fn with_placement_order(mut self, order: PlacementOrder) -> Self {
        self.placement_order = order;
        self
    }

    /// Check the histogram against the grid before any ship is placed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = &self.ship_counts;
        if counts.as_slice().iter().all(|&n| n == 0) {
            return Err(ConfigError::NoShips);
        }
        if counts.longest() > self.grid_side {
            return Err(ConfigError::ShipsTooLarge {
                longest: counts.longest(),
                grid_side: self.grid_side,
            });
        }
        let available = self.grid_side.saturating_mul(self.grid_side);
        match counts.total_cells() {
            Some(requested) if requested <= available => Ok(()),
            requested => Err(ConfigError::TooManyShipCells {
                requested: requested.unwrap_or(usize::MAX),
                available,
            }),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHOT_BUDGET, DEFAULT_GRID_SIDE, ShipCounts::default())
    }
}

/// Command-line flags shared by the binaries.
#[cfg(feature = "std")]
#[derive(clap::Args, Debug, Clone)]
pub struct GameArgs {
    /// Length of the grid side in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIDE)]
    pub grid_side: usize,
    /// Number of shots before the game is lost.
    #[arg(long, default_value_t = DEFAULT_SHOT_BUDGET)]
    pub shots: u32,
    /// Ships per size, smallest first (e.g. "5,3,2,1,1,1").
    #[arg(long, default_value = "5,3,2,1,1,1")]
    pub ships: ShipCounts,
    /// Place the largest ships first.
    #[arg(long)]
    pub largest_first: bool,
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    pub seed: Option<u64>,
}

#[cfg(feature = "std")]
impl GameArgs {
    pub fn config(&self) -> GameConfig {
        let order = if self.largest_first {
            PlacementOrder::LargestFirst
        } else {
            PlacementOrder::SmallestFirst
        };
        GameConfig::new(self.shots, self.grid_side, self.ships.clone()).with_placement_order(order)
    }

    /// Seeded generator when `--seed` is given, otherwise seeded from the OS.
    pub fn rng(&self) -> rand::rngs::SmallRng {
        use rand::SeedableRng;
        match self.seed {
            Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
            None => rand::rngs::SmallRng::from_rng(&mut rand::rng()),
        }
    }
}
