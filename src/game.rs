//! Turn orchestration: placement phase, battle phase, win detection.

use rand::Rng;
use serde::Serialize;

use crate::ai::TargetingAi;
use crate::board::Board;
use crate::common::{CellState, Coord, GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::fleet::{Fleet, ShipStatus};
use crate::ship::Orientation;
use crate::shot;

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Human is placing ships; the computer fleet is not on the board yet.
    Placement,
    /// Fleets are placed and shots are being exchanged.
    Battle,
    /// One fleet is fully sunk; the named side won.
    Over(Side),
}

/// Running counters for one side's shooting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BattleStats {
    pub shots_fired: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

impl BattleStats {
    fn record(&mut self, outcome: ShotOutcome) {
        self.shots_fired += 1;
        match outcome {
            ShotOutcome::Hit => self.hits += 1,
            ShotOutcome::HitAndSunk(_) => {
                self.hits += 1;
                self.ships_sunk += 1;
            }
            ShotOutcome::Miss | ShotOutcome::AlreadyTargeted => {}
        }
    }
}

/// A single resolved AI shot, for turn-by-turn replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiShot {
    pub cell: Coord,
    pub outcome: ShotOutcome,
}

struct SideState {
    board: Board,
    fleet: Fleet,
}

impl SideState {
    fn new() -> Self {
        SideState {
            board: Board::new(),
            fleet: Fleet::new(),
        }
    }
}

/// The game controller. Owns both boards and fleets, the computer's
/// targeting state, and the turn/phase machine.
///
/// Exactly one actor is ever to move; every command resolves fully (state
/// updated, win checked) before control can pass. The computer's extra turns
/// after a hit are taken one [`ai_step`](Game::ai_step) call at a time so a
/// consumer can replay them shot by shot.
pub struct Game {
    human: SideState,
    ai: SideState,
    gunner: TargetingAi,
    phase: Phase,
    turn: Side,
    human_stats: BattleStats,
    ai_stats: BattleStats,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game in the placement phase with empty boards.
    pub fn new() -> Self {
        Game {
            human: SideState::new(),
            ai: SideState::new(),
            gunner: TargetingAi::new(),
            phase: Phase::Placement,
            turn: Side::Human,
            human_stats: BattleStats::default(),
            ai_stats: BattleStats::default(),
        }
    }

    /// Discard all state and return to the placement phase.
    pub fn reset(&mut self) {
        log::info!("game reset");
        *self = Game::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move. Meaningful only during battle.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Winner once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over(side) => Some(side),
            _ => None,
        }
    }

    /// Place one human roster ship during the placement phase.
    pub fn place_ship(
        &mut self,
        index: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::IllegalPlacement);
        }
        self.human.fleet.place(&mut self.human.board, index, origin, orientation)
    }

    /// Randomly place every human ship not yet on the board.
    pub fn auto_place_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::IllegalPlacement);
        }
        self.human.fleet.auto_place_remaining(&mut self.human.board, rng)
    }

    /// Begin battle: requires the full human fleet on the board, auto-places
    /// the computer fleet, and gives the human the first shot.
    pub fn start_battle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::IllegalPlacement);
        }
        if !self.human.fleet.all_placed() {
            return Err(GameError::PlacementIncomplete);
        }
        self.ai.fleet.auto_place_remaining(&mut self.ai.board, rng)?;
        self.phase = Phase::Battle;
        self.turn = Side::Human;
        log::info!("battle begins");
        Ok(())
    }

    /// Human fires at the computer's board. Hits retain the turn; a miss
    /// hands it to the computer. Re-firing a resolved cell, firing out of
    /// turn, or firing outside battle is rejected with no state change.
    pub fn fire_at(&mut self, cell: Coord) -> Result<ShotOutcome, GameError> {
        if self.phase != Phase::Battle || self.turn != Side::Human {
            return Err(GameError::IllegalTarget);
        }
        if !self.ai.board.in_bounds(cell) {
            return Err(GameError::IllegalTarget);
        }
        let outcome = shot::resolve(&mut self.ai.board, &mut self.ai.fleet, cell)?;
        if outcome == ShotOutcome::AlreadyTargeted {
            return Err(GameError::IllegalTarget);
        }
        self.human_stats.record(outcome);
        if let ShotOutcome::HitAndSunk(name) = outcome {
            log::info!("human sunk the enemy {}", name);
        }
        if self.ai.fleet.is_defeated() {
            self.phase = Phase::Over(Side::Human);
            log::info!("human wins");
        } else if outcome == ShotOutcome::Miss {
            self.turn = Side::Ai;
        }
        Ok(outcome)
    }

    /// The computer takes exactly one shot at the human board. Hits retain
    /// the turn, so callers loop on `turn()` to replay a streak shot by
    /// shot. Errors if it is not the computer's turn to move.
    pub fn ai_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AiShot, GameError> {
        if self.phase != Phase::Battle || self.turn != Side::Ai {
            return Err(GameError::IllegalTarget);
        }
        // Queue discipline keeps resolved cells out of the selector, but a
        // stale entry must not consume the turn or touch the counters.
        let (cell, outcome) = loop {
            let cell = self.gunner.select_cell(&self.human.board, rng);
            let outcome = shot::resolve(&mut self.human.board, &mut self.human.fleet, cell)?;
            if outcome != ShotOutcome::AlreadyTargeted {
                break (cell, outcome);
            }
        };
        self.gunner.record_outcome(&self.human.board, cell, outcome, rng);
        self.ai_stats.record(outcome);
        if let ShotOutcome::HitAndSunk(name) = outcome {
            log::info!("computer sunk the {}", name);
        }
        if self.human.fleet.is_defeated() {
            self.phase = Phase::Over(Side::Ai);
            log::info!("computer wins");
        } else if outcome == ShotOutcome::Miss {
            self.turn = Side::Human;
        }
        Ok(AiShot { cell, outcome })
    }

    /// Cell-state grid of `owner`'s board as seen by `viewer`. An opponent
    /// never sees unrevealed `Occupied` cells.
    pub fn view(&self, owner: Side, viewer: Side) -> [[CellState; BOARD_SIZE]; BOARD_SIZE] {
        self.side(owner).board.grid(owner != viewer)
    }

    /// Roster flags for `owner`'s fleet.
    pub fn fleet_status(&self, owner: Side) -> [ShipStatus; NUM_SHIPS] {
        self.side(owner).fleet.status()
    }

    /// Shooting counters for `side`.
    pub fn stats(&self, side: Side) -> BattleStats {
        match side {
            Side::Human => self.human_stats,
            Side::Ai => self.ai_stats,
        }
    }

    /// The computer's targeting state, for observers.
    pub fn gunner(&self) -> &TargetingAi {
        &self.gunner
    }

    fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }
}
