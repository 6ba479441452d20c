//! One side's board: occupancy plus shot history, as packed cell sets.

use crate::common::{Cells, CellState, Coord};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

/// An N×N board. Cell state is derived from four overlapping masks; the
/// `sunk` mask takes precedence over `hits` so sinking a ship retroactively
/// repaints its already-hit cells.
#[derive(Clone, Copy, Default)]
pub struct Board {
    occupied: Cells,
    hits: Cells,
    misses: Cells,
    sunk: Cells,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `(row, col)` lies on the board.
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.0 < BOARD_SIZE && coord.1 < BOARD_SIZE
    }

    /// True iff every cell of a `size`-long ship at `origin` along
    /// `orientation` is on the board and empty. No side effects.
    pub fn can_place(&self, origin: Coord, size: usize, orientation: Orientation) -> bool {
        let (row, col) = origin;
        let (dr, dc) = orientation.step();
        (0..size).all(|i| {
            let cell = (row + dr * i, col + dc * i);
            self.in_bounds(cell) && self.cell(cell) == CellState::Empty
        })
    }

    /// Mark the ship's cells occupied. Callers must have verified
    /// `can_place`; overlapping an existing ship is a programming error.
    pub fn place(&mut self, ship: &Ship) {
        debug_assert!(self.occupied.is_disjoint(&ship.mask()));
        self.occupied |= ship.mask();
    }

    /// Derived state of a single cell.
    pub fn cell(&self, (row, col): Coord) -> CellState {
        if self.sunk.contains(row, col) {
            CellState::Sunk
        } else if self.hits.contains(row, col) {
            CellState::Hit
        } else if self.misses.contains(row, col) {
            CellState::Miss
        } else if self.occupied.contains(row, col) {
            CellState::Occupied
        } else {
            CellState::Empty
        }
    }

    /// True iff the cell has not been fired upon yet.
    pub fn is_attackable(&self, (row, col): Coord) -> bool {
        !(self.hits.contains(row, col)
            || self.misses.contains(row, col)
            || self.sunk.contains(row, col))
    }

    /// Record a hit at `coord`.
    pub(crate) fn mark_hit(&mut self, (row, col): Coord) {
        self.hits.insert(row, col);
    }

    /// Record a miss at `coord`.
    pub(crate) fn mark_miss(&mut self, (row, col): Coord) {
        self.misses.insert(row, col);
    }

    /// Repaint every cell of a sunk ship, overwriting its hit markers.
    pub(crate) fn mark_sunk(&mut self, mask: Cells) {
        self.sunk |= mask;
    }

    /// Full grid of cell states. With `fog` set, occupied-but-unhit cells
    /// are reported as empty, hiding unrevealed ships from the opponent.
    pub fn grid(&self, fog: bool) -> [[CellState; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, grid_row) in grid.iter_mut().enumerate() {
            for (c, cell) in grid_row.iter_mut().enumerate() {
                let state = self.cell((r, c));
                *cell = if fog && state == CellState::Occupied {
                    CellState::Empty
                } else {
                    state
                };
            }
        }
        grid
    }

    /// Number of occupied cells, for placement accounting.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}
