//! Shared engine types: coordinates, cell states, shot outcomes, errors.

use serde::Serialize;

use crate::config::BOARD_SIZE;
use crate::mask::CellSet;

/// Board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Cell-set type sized for the game board.
pub(crate) type Cells = CellSet<u128, BOARD_SIZE>;

/// Observable state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellState {
    /// Open water, never fired upon.
    Empty,
    /// Holds an undamaged segment of a ship.
    Occupied,
    /// A ship segment that has been hit.
    Hit,
    /// Fired upon, nothing there.
    Miss,
    /// Segment of a ship whose every cell has been hit.
    Sunk,
}

/// Result of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship without sinking it.
    Hit,
    /// Shot destroyed the last intact segment of the named ship.
    HitAndSunk(&'static str),
    /// Cell was already resolved; nothing changed.
    AlreadyTargeted,
}

/// Errors returned by engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship index outside the fixed roster.
    InvalidShipIndex,
    /// That roster slot already holds a placed ship.
    ShipAlreadyPlaced,
    /// Placement out of bounds or overlapping another ship.
    IllegalPlacement,
    /// Battle cannot start before every ship is placed.
    PlacementIncomplete,
    /// Random placement exhausted its attempt budget.
    PlacementExhausted,
    /// Target rejected: out of bounds, already resolved, or fired outside
    /// the battle phase / out of turn.
    IllegalTarget,
    /// An occupied cell had no owning ship. Board and fleet are out of sync.
    UnknownShipHit,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidShipIndex => write!(f, "ship index is out of range"),
            GameError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            GameError::IllegalPlacement => {
                write!(f, "placement is out of bounds or overlaps another ship")
            }
            GameError::PlacementIncomplete => {
                write!(f, "all ships must be placed before battle starts")
            }
            GameError::PlacementExhausted => {
                write!(f, "unable to find a legal random placement")
            }
            GameError::IllegalTarget => write!(f, "target cell is not attackable right now"),
            GameError::UnknownShipHit => write!(f, "occupied cell has no owning ship"),
        }
    }
}

impl std::error::Error for GameError {}
