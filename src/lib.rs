//! Engine for a two-player (human vs. computer) naval combat game on a
//! hidden 10x10 grid: placement legality, shot resolution, turn order, win
//! detection, and the computer's hunt-and-target strategy. Rendering and
//! input belong to consumers of [`Game`].

mod ai;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod logging;
mod mask;
mod ship;
mod shot;

pub use ai::{AiMode, TargetingAi};
pub use board::Board;
pub use common::{CellState, Coord, GameError, ShotOutcome};
pub use config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, ROSTER, TOTAL_SHIP_CELLS};
pub use fleet::{Fleet, ShipStatus};
pub use game::{AiShot, BattleStats, Game, Phase, Side};
pub use logging::init_logging;
pub use mask::CellSet;
pub use ship::{Orientation, Ship, ShipClass};
pub use shot::resolve;
