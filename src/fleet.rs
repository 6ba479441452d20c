//! The five-ship fleet for one side: placement and damage queries.

use rand::Rng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{Coord, GameError};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, ROSTER};
use crate::ship::{Orientation, Ship};

/// Placement and damage flags for one roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipStatus {
    pub name: &'static str,
    pub size: usize,
    pub placed: bool,
    pub sunk: bool,
}

/// One side's fleet: the fixed roster, each slot filled once placed.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Fleet {
    /// Create a fleet with no ships placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the roster ship at `index` manually. Checks slot validity and
    /// placement legality; on success marks the board.
    pub fn place(
        &mut self,
        board: &mut Board,
        index: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        if self.ships[index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let class = ROSTER[index];
        if !board.can_place(origin, class.size(), orientation) {
            return Err(GameError::IllegalPlacement);
        }
        let ship = Ship::new(class, origin, orientation)?;
        board.place(&ship);
        self.ships[index] = Some(ship);
        Ok(())
    }

    /// Draw a random legal `(origin, orientation)` for the roster ship at
    /// `index`. Origins are drawn from the range that keeps the ship on the
    /// board for the drawn orientation, so only overlap rejects a draw.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
        index: usize,
    ) -> Result<(Coord, Orientation), GameError> {
        if index >= NUM_SHIPS {
            return Err(GameError::InvalidShipIndex);
        }
        let class = ROSTER[index];
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - class.size()),
                Orientation::Vertical => (BOARD_SIZE - class.size(), BOARD_SIZE - 1),
            };
            let origin = (rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if board.can_place(origin, class.size(), orientation) {
                return Ok((origin, orientation));
            }
        }
        Err(GameError::PlacementExhausted)
    }

    /// Randomly place every ship that is not yet on the board, in roster
    /// (descending size) order.
    pub fn auto_place_remaining<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<(), GameError> {
        for index in 0..NUM_SHIPS {
            if self.ships[index].is_some() {
                continue;
            }
            let (origin, orientation) = self.random_placement(board, rng, index)?;
            self.place(board, index, origin, orientation)?;
        }
        Ok(())
    }

    /// The ship occupying `coord`, if any.
    pub fn find_ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships
            .iter()
            .flatten()
            .find(|ship| ship.contains(coord.0, coord.1))
    }

    /// Mutable variant of [`find_ship_at`](Self::find_ship_at).
    pub fn find_ship_at_mut(&mut self, coord: Coord) -> Option<&mut Ship> {
        self.ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.contains(coord.0, coord.1))
    }

    /// True once all five ships are placed.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(|slot| slot.is_some())
    }

    /// True iff the fleet is fully placed and every ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.all_placed() && self.ships.iter().flatten().all(|ship| ship.is_sunk())
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.ships
            .iter()
            .flatten()
            .filter(|ship| ship.is_sunk())
            .count()
    }

    /// Per-slot placement and damage flags, in roster order.
    pub fn status(&self) -> [ShipStatus; NUM_SHIPS] {
        core::array::from_fn(|i| {
            let class = ROSTER[i];
            ShipStatus {
                name: class.name(),
                size: class.size(),
                placed: self.ships[i].is_some(),
                sunk: self.ships[i].map(|s| s.is_sunk()).unwrap_or(false),
            }
        })
    }

    /// Iterator over placed ships.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }
}
