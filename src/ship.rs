//! Ship geometry and damage tracking.

use core::fmt;

use serde::Serialize;

use crate::common::{Cells, Coord, GameError};
use crate::config::BOARD_SIZE;

/// Axis a ship lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Per-segment step as `(row, col)` deltas.
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A roster entry: ship name and length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship placed on the board, with per-segment damage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    origin: Coord,
    orientation: Orientation,
    mask: Cells,
    hits: Cells,
}

impl Ship {
    /// Place a ship of `class` at `origin` along `orientation`.
    /// Fails if any segment would fall outside the board.
    pub fn new(class: ShipClass, origin: Coord, orientation: Orientation) -> Result<Self, GameError> {
        let (row, col) = origin;
        let end = match orientation {
            Orientation::Horizontal => col + class.size(),
            Orientation::Vertical => row + class.size(),
        };
        if row >= BOARD_SIZE || col >= BOARD_SIZE || end > BOARD_SIZE {
            return Err(GameError::IllegalPlacement);
        }
        let (dr, dc) = orientation.step();
        let mask = Cells::from_cells((0..class.size()).map(|i| (row + dr * i, col + dc * i)));
        Ok(Ship {
            class,
            origin,
            orientation,
            mask,
            hits: Cells::new(),
        })
    }

    /// Iterator over the cells the ship occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (row, col) = self.origin;
        let (dr, dc) = self.orientation.step();
        (0..self.class.size()).map(move |i| (row + dr * i, col + dc * i))
    }

    /// True if `(row, col)` is one of the ship's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.contains(row, col)
    }

    /// Record damage at `(row, col)`. Returns `true` if the cell belongs to
    /// the ship; repeated hits on the same cell are not double counted.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.mask.contains(row, col) {
            self.hits.insert(row, col);
            true
        } else {
            false
        }
    }

    /// Number of distinct cells hit so far. Never exceeds the ship size.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// True once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.class.size()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship.
    pub(crate) fn mask(&self) -> Cells {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.class.name(),
            self.origin.0,
            self.origin.1,
            self.orientation,
            self.hits.len(),
            self.class.size(),
        )
    }
}
