//! Ship definitions: a straight run of grid cells with a destroyed flag.

use core::fmt;
use core::hash::{Hash, Hasher};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cells of a ship of `size` starting at `start` on a grid of `side`.
    /// Returns `None` when the run would leave the grid or wrap onto
    /// another row.
    pub fn span(self, start: usize, size: usize, side: usize) -> Option<Vec<usize>> {
        if side == 0 || size == 0 || start >= side * side {
            return None;
        }
        let (row, col) = (start / side, start % side);
        match self {
            Orientation::Horizontal if col + size > side => None,
            Orientation::Vertical if row + size > side => None,
            Orientation::Horizontal => Some((start..start + size).collect()),
            Orientation::Vertical => Some((0..size).map(|i| start + i * side).collect()),
        }
    }
}

/// A ship placed on the grid.
///
/// The cell set is fixed at creation. Two ships are equal when they occupy
/// the same cells; the destroyed flag does not take part in equality.
#[derive(Clone)]
pub struct Ship {
    cells: Vec<usize>,
    destroyed: bool,
}

impl Ship {
    pub fn new(cells: Vec<usize>) -> Self {
        Self {
            cells,
            destroyed: false,
        }
    }

    /// Cells occupied by the ship, in placement order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells taken by the ship.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the ship as destroyed.
    ///
    /// # Panics
    /// If the ship was already destroyed.
    pub fn destroy(&mut self) {
        assert!(
            !self.destroyed,
            "ship positioned on cells {:?} was already destroyed",
            self.cells
        );
        self.destroyed = true;
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Ship {}

impl Hash for Ship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ cells: {:?}, destroyed: {} }}",
            self.cells, self.destroyed
        )
    }
}
