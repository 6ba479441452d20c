use broadside::{CellState, Coord, Game, Phase, Side, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::new();
    game.auto_place_remaining(&mut rng)?;
    game.start_battle(&mut rng)?;

    let mut turns = 0usize;
    while game.phase() == Phase::Battle {
        turns += 1;
        if game.turn() == Side::Human {
            let cell = random_attackable(&game, &mut rng);
            game.fire_at(cell)?;
        } else {
            game.ai_step(&mut rng)?;
        }
    }

    let winner = match game.winner() {
        Some(Side::Human) => "player",
        Some(Side::Ai) => "computer",
        None => unreachable!("battle loop exits only once the game is over"),
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": turns,
        "player": game.stats(Side::Human),
        "computer": game.stats(Side::Ai),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Baseline shooter for the player side: uniform over unresolved cells.
fn random_attackable<R: Rng>(game: &Game, rng: &mut R) -> Coord {
    let view = game.view(Side::Ai, Side::Human);
    loop {
        let cell = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
        if matches!(view[cell.0][cell.1], CellState::Empty | CellState::Occupied) {
            return cell;
        }
    }
}
