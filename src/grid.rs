//! Square grid of cell states, addressed by linear cell id.
//!
//! Cell `id` maps to `(id / side, id % side)`. The grid is the single source
//! of truth for both placement and shot resolution; callers outside the crate
//! only ever see it through shared borrows.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
    Destroyed,
}

impl CellState {
    /// A ship segment may occupy or border this cell.
    #[inline]
    pub fn is_clear(self) -> bool {
        matches!(self, CellState::Empty | CellState::Miss)
    }

    /// The cell has already received a shot.
    #[inline]
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit | CellState::Destroyed)
    }
}

/// A `side × side` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![CellState::Empty; side * side],
        }
    }

    /// Length of one side in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view of all cell states, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State of `cell`.
    ///
    /// # Panics
    /// If `cell` is outside the grid.
    pub fn get(&self, cell: usize) -> CellState {
        self.check(cell);
        self.cells[cell]
    }

    pub(crate) fn set(&mut self, cell: usize, state: CellState) {
        self.check(cell);
        self.cells[cell] = state;
    }

    /// `(row, column)` of `cell`.
    #[inline]
    pub fn position(&self, cell: usize) -> (usize, usize) {
        (cell / self.side, cell % self.side)
    }

    /// Cell id at `(row, col)`, or `None` when outside the grid.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// Orthogonal neighbours of `cell` that lie inside the grid.
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.position(cell);
        let up = row.checked_sub(1).and_then(|r| self.cell_at(r, col));
        let down = self.cell_at(row + 1, col);
        let left = col.checked_sub(1).and_then(|c| self.cell_at(row, c));
        let right = self.cell_at(row, col + 1);
        [up, down, left, right].into_iter().flatten()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> core::slice::Chunks<'_, CellState> {
        self.cells.chunks(self.side.max(1))
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    #[inline]
    fn check(&self, cell: usize) {
        assert!(
            cell < self.cells.len(),
            "cell {} is outside a grid of {} cells",
            cell,
            self.cells.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_through_cell_at() {
        let grid = Grid::new(7);
        for cell in 0..grid.len() {
            let (r, c) = grid.position(cell);
            assert_eq!(grid.cell_at(r, c), Some(cell));
        }
        assert_eq!(grid.cell_at(7, 0), None);
        assert_eq!(grid.cell_at(0, 7), None);
    }

    #[test]
    fn neighbors_do_not_wrap_rows() {
        let grid = Grid::new(4);
        let mut corner: Vec<_> = grid.neighbors(0).collect();
        corner.sort();
        assert_eq!(corner, vec![1, 4]);

        // end of the first row must not see the start of the second
        let mut edge: Vec<_> = grid.neighbors(3).collect();
        edge.sort();
        assert_eq!(edge, vec![2, 7]);

        assert_eq!(grid.neighbors(5).count(), 4);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1);
        assert_eq!(grid.neighbors(0).count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn get_out_of_range_panics() {
        Grid::new(3).get(9);
    }
}
