//! Shot resolution against a board/fleet pair.

use crate::board::Board;
use crate::common::{CellState, Coord, GameError, ShotOutcome};
use crate::fleet::Fleet;

/// Apply one shot at `cell` and report the outcome.
///
/// A cell that is already resolved returns `AlreadyTargeted` with no
/// mutation; callers are expected not to re-offer such cells, but the
/// resolver stays defensive. The only error is a board/fleet desync, which a
/// correct engine never produces. `cell` must be in bounds.
pub fn resolve(board: &mut Board, fleet: &mut Fleet, cell: Coord) -> Result<ShotOutcome, GameError> {
    debug_assert!(board.in_bounds(cell));
    match board.cell(cell) {
        CellState::Hit | CellState::Miss | CellState::Sunk => Ok(ShotOutcome::AlreadyTargeted),
        CellState::Empty => {
            board.mark_miss(cell);
            Ok(ShotOutcome::Miss)
        }
        CellState::Occupied => {
            board.mark_hit(cell);
            let ship = fleet
                .find_ship_at_mut(cell)
                .ok_or(GameError::UnknownShipHit)?;
            ship.register_hit(cell.0, cell.1);
            if ship.is_sunk() {
                let name = ship.class().name();
                let mask = ship.mask();
                board.mark_sunk(mask);
                log::debug!("{} sunk at {:?}", name, cell);
                Ok(ShotOutcome::HitAndSunk(name))
            } else {
                Ok(ShotOutcome::Hit)
            }
        }
    }
}
