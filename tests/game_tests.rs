use broadside::{
    CellState, Coord, Game, GameError, Orientation, Phase, ShotOutcome, Side, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn placed_game(rng: &mut SmallRng) -> Game {
    let mut game = Game::new();
    game.auto_place_remaining(rng).unwrap();
    game.start_battle(rng).unwrap();
    game
}

/// Random unresolved cell on the enemy board, from the fogged view.
fn random_attackable<R: Rng>(game: &Game, rng: &mut R) -> Coord {
    let view = game.view(Side::Ai, Side::Human);
    loop {
        let cell = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
        if matches!(view[cell.0][cell.1], CellState::Empty | CellState::Occupied) {
            return cell;
        }
    }
}

/// Drive a full game to completion, alternating a random human shooter with
/// the targeting AI. Returns the number of resolved shots.
fn run_to_completion(game: &mut Game, rng: &mut SmallRng) -> usize {
    let mut shots = 0;
    while game.phase() == Phase::Battle {
        shots += 1;
        assert!(shots <= 2 * BOARD_SIZE * BOARD_SIZE, "game failed to terminate");
        if game.turn() == Side::Human {
            let cell = random_attackable(game, rng);
            game.fire_at(cell).unwrap();
        } else {
            game.ai_step(rng).unwrap();
        }
    }
    shots
}

#[test]
fn battle_requires_full_placement() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new();
    game.place_ship(0, (0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(game.start_battle(&mut rng), Err(GameError::PlacementIncomplete));
    assert_eq!(game.phase(), Phase::Placement);

    game.auto_place_remaining(&mut rng).unwrap();
    game.start_battle(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.turn(), Side::Human);
    // Both fleets are fully placed once battle starts.
    assert!(game.fleet_status(Side::Human).iter().all(|s| s.placed));
    assert!(game.fleet_status(Side::Ai).iter().all(|s| s.placed));
}

#[test]
fn no_firing_outside_battle() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = Game::new();
    assert_eq!(game.fire_at((0, 0)), Err(GameError::IllegalTarget));
    assert_eq!(game.ai_step(&mut rng).unwrap_err(), GameError::IllegalTarget);
}

#[test]
fn no_placement_after_battle_starts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = placed_game(&mut rng);
    assert_eq!(
        game.place_ship(0, (0, 0), Orientation::Horizontal),
        Err(GameError::IllegalPlacement)
    );
    assert_eq!(game.auto_place_remaining(&mut rng), Err(GameError::IllegalPlacement));
    assert_eq!(game.start_battle(&mut rng), Err(GameError::IllegalPlacement));
}

#[test]
fn hits_retain_the_turn_and_misses_pass_it() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = placed_game(&mut rng);

    'outer: for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if game.phase() != Phase::Battle || game.turn() != Side::Human {
                break 'outer;
            }
            match game.fire_at((r, c)).unwrap() {
                ShotOutcome::Hit | ShotOutcome::HitAndSunk(_) => {
                    assert_eq!(game.turn(), Side::Human);
                }
                ShotOutcome::Miss => {
                    assert_eq!(game.turn(), Side::Ai);
                    break 'outer;
                }
                ShotOutcome::AlreadyTargeted => unreachable!(),
            }
        }
    }
}

#[test]
fn refire_is_rejected_without_state_change() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = placed_game(&mut rng);

    // Find a miss so the cell is resolved but the game continues.
    let mut cell = None;
    'search: for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if game.turn() != Side::Human {
                break 'search;
            }
            if game.fire_at((r, c)).unwrap() == ShotOutcome::Miss {
                cell = Some((r, c));
                break 'search;
            }
        }
    }
    let cell = cell.expect("board had no open water");
    // Hand the turn back to the human.
    while game.phase() == Phase::Battle && game.turn() == Side::Ai {
        game.ai_step(&mut rng).unwrap();
    }

    let stats = game.stats(Side::Human);
    assert_eq!(game.fire_at(cell), Err(GameError::IllegalTarget));
    assert_eq!(game.stats(Side::Human), stats);
    // Out of bounds is rejected the same way.
    assert_eq!(game.fire_at((0, BOARD_SIZE)), Err(GameError::IllegalTarget));
}

#[test]
fn game_ends_when_a_fleet_is_sunk() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut game = placed_game(&mut rng);
    run_to_completion(&mut game, &mut rng);

    let winner = game.winner().unwrap();
    assert_eq!(game.phase(), Phase::Over(winner));
    let loser = winner.opponent();
    assert!(game.fleet_status(loser).iter().all(|s| s.sunk));
    assert_eq!(game.stats(winner).ships_sunk, 5);

    // Once over, neither side may fire.
    assert_eq!(game.fire_at((0, 0)), Err(GameError::IllegalTarget));
    assert_eq!(game.ai_step(&mut rng).unwrap_err(), GameError::IllegalTarget);
}

#[test]
fn fog_of_war_hides_enemy_ships() {
    let mut rng = SmallRng::seed_from_u64(7);
    let game = placed_game(&mut rng);

    let enemy_view = game.view(Side::Ai, Side::Human);
    for row in &enemy_view {
        for state in row {
            assert_ne!(*state, CellState::Occupied);
        }
    }
    // One's own board shows all 17 ship cells.
    let own_view = game.view(Side::Human, Side::Human);
    let occupied = own_view
        .iter()
        .flatten()
        .filter(|&&s| s == CellState::Occupied)
        .count();
    assert_eq!(occupied, broadside::TOTAL_SHIP_CELLS);
}

#[test]
fn ai_queue_is_empty_after_each_sink() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut game = placed_game(&mut rng);

    while game.phase() == Phase::Battle {
        if game.turn() == Side::Human {
            let cell = random_attackable(&game, &mut rng);
            game.fire_at(cell).unwrap();
        } else {
            let shot = game.ai_step(&mut rng).unwrap();
            if let ShotOutcome::HitAndSunk(_) = shot.outcome {
                assert_eq!(game.gunner().queued_targets().count(), 0);
                assert!(game.gunner().pursuit_hits().is_empty());
            }
        }
    }
}

#[test]
fn reset_returns_to_placement() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = placed_game(&mut rng);
    run_to_completion(&mut game, &mut rng);

    game.reset();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.winner(), None);
    assert_eq!(game.stats(Side::Human).shots_fired, 0);
    assert!(game.fleet_status(Side::Human).iter().all(|s| !s.placed));
    game.place_ship(0, (0, 0), Orientation::Horizontal).unwrap();
}
