//! Hunt-and-target strategy for the computer opponent.
//!
//! The strategy mirrors how a human plays: fire at random until something is
//! hit, probe the four neighbors of the hit, and once two adjacent hits
//! reveal the ship's axis, walk the line. State is scoped to the ship
//! currently being pursued and resets whenever that ship goes down.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Whether the strategy is probing blind or working a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// No pending targets; cells are drawn at random.
    Hunt,
    /// Following up on hits from the target queue.
    Target,
}

/// Stateful cell selector for the attacking side.
#[derive(Debug, Clone, Default)]
pub struct TargetingAi {
    target_queue: VecDeque<Coord>,
    hit_history: Vec<Coord>,
    last_orientation: Option<Orientation>,
}

impl TargetingAi {
    /// Fresh strategy with no pursuit in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, decided solely by the queue.
    pub fn mode(&self) -> AiMode {
        if self.target_queue.is_empty() {
            AiMode::Hunt
        } else {
            AiMode::Target
        }
    }

    /// Pick the next cell to fire at on `board`.
    ///
    /// Target mode pops the queue front; hunt mode redraws uniformly until
    /// it lands on an attackable cell. The board always has one while the
    /// game is in progress.
    pub fn select_cell<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coord {
        if let Some(cell) = self.target_queue.pop_front() {
            log::debug!("target mode: firing at {:?}", cell);
            return cell;
        }
        loop {
            let cell = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if board.is_attackable(cell) {
                log::debug!("hunt mode: firing at {:?}", cell);
                return cell;
            }
        }
    }

    /// Feed back the resolved outcome of the shot at `cell`.
    pub fn record_outcome<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        cell: Coord,
        outcome: ShotOutcome,
        rng: &mut R,
    ) {
        match outcome {
            ShotOutcome::Miss | ShotOutcome::AlreadyTargeted => {}
            ShotOutcome::HitAndSunk(name) => {
                // Pursuit complete. The next hit starts fresh.
                log::debug!("pursuit of {} complete, clearing hunt state", name);
                self.hit_history.clear();
                self.target_queue.clear();
                self.last_orientation = None;
            }
            ShotOutcome::Hit => {
                self.hit_history.push(cell);
                self.last_orientation = orientation_of(&self.hit_history);
                self.enqueue_adjacent_targets(board, cell, rng);
            }
        }
    }

    /// Queue the neighbors of a fresh hit: along-axis cells first when the
    /// orientation is known, the remaining perpendicular cells as fallback.
    /// Neighbor order is shuffled before partitioning so probing around a
    /// lone hit carries no directional bias.
    fn enqueue_adjacent_targets<R: Rng + ?Sized>(&mut self, board: &Board, cell: Coord, rng: &mut R) {
        let (row, col) = cell;
        let mut deltas: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        deltas.shuffle(rng);

        let mut neighbors: Vec<Coord> = Vec::with_capacity(4);
        for (dr, dc) in deltas {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            if r < BOARD_SIZE && c < BOARD_SIZE && board.is_attackable((r, c)) {
                neighbors.push((r, c));
            }
        }

        let (priority, fallback): (Vec<Coord>, Vec<Coord>) = match self.last_orientation {
            Some(Orientation::Horizontal) => neighbors.into_iter().partition(|&(r, _)| r == row),
            Some(Orientation::Vertical) => neighbors.into_iter().partition(|&(_, c)| c == col),
            None => (Vec::new(), neighbors),
        };

        for candidate in priority.into_iter().chain(fallback) {
            if !self.target_queue.contains(&candidate) {
                self.target_queue.push_back(candidate);
            }
        }
    }

    /// Pending targets in firing order.
    pub fn queued_targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.target_queue.iter().copied()
    }

    /// Hits recorded against the ship currently being pursued.
    pub fn pursuit_hits(&self) -> &[Coord] {
        &self.hit_history
    }

    /// Axis inferred for the pursued ship, if any.
    pub fn detected_orientation(&self) -> Option<Orientation> {
        self.last_orientation
    }
}

/// Infer the pursued ship's axis from the last two hits only: same row and
/// adjacent columns means horizontal, same column and adjacent rows means
/// vertical. A greedy local heuristic; it does not fit all hits globally.
fn orientation_of(hits: &[Coord]) -> Option<Orientation> {
    let [.., (r1, c1), (r2, c2)] = hits else {
        return None;
    };
    if r1 == r2 && c1.abs_diff(*c2) == 1 {
        Some(Orientation::Horizontal)
    } else if c1 == c2 && r1.abs_diff(*r2) == 1 {
        Some(Orientation::Vertical)
    } else {
        None
    }
}
