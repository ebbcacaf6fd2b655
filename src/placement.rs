//! Randomised ship placement with a mandatory one-cell buffer.
//!
//! Each ship starts a linear scan at a uniformly random cell and walks every
//! cell of the grid (wrapping at the end) until a start cell accepts the ship
//! in one of the two orientations. The orientation tried first at each start
//! is picked at random. A ship that fits nowhere is skipped; the rest of the
//! fleet is still placed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::config::{PlacementOrder, ShipCounts};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship};

/// How many of the requested ships made it onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
}

impl PlacementReport {
    pub fn skipped(&self) -> usize {
        self.requested - self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }
}

/// Place every ship requested by `counts`, in `order`.
pub fn place_fleet<R: Rng>(
    grid: &mut Grid,
    counts: &ShipCounts,
    order: PlacementOrder,
    rng: &mut R,
) -> (Vec<Ship>, PlacementReport) {
    let mut ships = Vec::with_capacity(counts.total_ships());
    let mut report = PlacementReport::default();
    for size in counts.sizes(order) {
        report.requested += 1;
        match place_random(grid, size, rng) {
            Some(ship) => {
                report.placed += 1;
                ships.push(ship);
            }
            None => warn!("no room left for a ship of size {}, skipping it", size),
        }
    }
    debug!(
        "placed {} of {} ships on a {}x{} grid",
        report.placed,
        report.requested,
        grid.side(),
        grid.side()
    );
    (ships, report)
}

/// Place one ship of `size`, scanning from a random start cell.
pub fn place_random<R: Rng>(grid: &mut Grid, size: usize, rng: &mut R) -> Option<Ship> {
    let cells = grid.len();
    if cells == 0 {
        return None;
    }
    let first = rng.random_range(0..cells);
    (0..cells)
        .map(|offset| (first + offset) % cells)
        .find_map(|start| place_at(grid, start, size, rng))
}

/// Try both orientations at `start`, a random one first.
pub fn place_at<R: Rng>(grid: &mut Grid, start: usize, size: usize, rng: &mut R) -> Option<Ship> {
    let first = if rng.random_bool(0.5) {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    [first, first.flipped()].into_iter().find_map(|orientation| {
        let cells = orientation.span(start, size, grid.side())?;
        if !can_place(grid, &cells) {
            return None;
        }
        for &cell in &cells {
            grid.set(cell, CellState::Ship);
        }
        debug!(
            "ship of size {} at {:?} {:?}",
            size,
            grid.position(start),
            orientation
        );
        Some(Ship::new(cells))
    })
}

/// Every cell of the prospective ship and all of its orthogonal neighbours
/// must be `Empty` or `Miss`.
pub fn can_place(grid: &Grid, cells: &[usize]) -> bool {
    cells.iter().all(|&cell| {
        grid.get(cell).is_clear() && grid.neighbors(cell).all(|n| grid.get(n).is_clear())
    })
}
