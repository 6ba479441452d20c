use std::io::{self, Write};

use broadside::{
    init_logging, CellState, Coord, Game, GameError, Orientation, Phase, ShotOutcome, Side,
    BOARD_SIZE, ROSTER,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch a full game play itself: random shooter vs. the targeting AI.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(make_rng(seed)),
        Commands::Auto { seed } => auto(make_rng(seed)),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn coord_to_string((r, c): Coord) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

fn cell_char(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Occupied => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

fn print_grid(grid: &[[CellState; BOARD_SIZE]; BOARD_SIZE]) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for (r, row) in grid.iter().enumerate() {
        print!("{:2} ", r + 1);
        for &state in row {
            print!(" {}", cell_char(state));
        }
        println!();
    }
}

fn print_boards(game: &Game) {
    println!("Enemy waters:");
    print_grid(&game.view(Side::Ai, Side::Human));
    println!("\nYour fleet:");
    print_grid(&game.view(Side::Human, Side::Human));
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn place_fleet(game: &mut Game, rng: &mut SmallRng) -> anyhow::Result<()> {
    println!("Place your ships (e.g. B4 H). Press enter to place the rest randomly.");
    for (index, class) in ROSTER.iter().enumerate() {
        loop {
            print_grid(&game.view(Side::Human, Side::Human));
            let line = read_line(&format!("Place {} (length {}): ", class.name(), class.size()))?;
            if line.is_empty() {
                game.auto_place_remaining(rng)?;
                return Ok(());
            }
            let mut parts = line.split_whitespace();
            let coord = parts.next().and_then(parse_coord);
            let orientation = match parts.next().map(str::to_ascii_uppercase).as_deref() {
                Some("V") => Orientation::Vertical,
                _ => Orientation::Horizontal,
            };
            match coord {
                Some(origin) => match game.place_ship(index, origin, orientation) {
                    Ok(()) => break,
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Invalid input"),
            }
        }
    }
    Ok(())
}

fn replay_ai_turns(game: &mut Game, rng: &mut SmallRng) -> anyhow::Result<()> {
    while game.phase() == Phase::Battle && game.turn() == Side::Ai {
        let shot = game.ai_step(rng)?;
        match shot.outcome {
            ShotOutcome::Miss => {
                println!("Computer fires at {} and misses.", coord_to_string(shot.cell))
            }
            ShotOutcome::Hit => {
                println!("Computer fires at {} and hits your ship!", coord_to_string(shot.cell))
            }
            ShotOutcome::HitAndSunk(name) => {
                println!("Computer fires at {} and sinks your {}!", coord_to_string(shot.cell), name)
            }
            ShotOutcome::AlreadyTargeted => {}
        }
    }
    Ok(())
}

fn play(mut rng: SmallRng) -> anyhow::Result<()> {
    loop {
        let mut game = Game::new();
        place_fleet(&mut game, &mut rng)?;
        game.start_battle(&mut rng)?;
        println!("Battle begins! Fire at enemy waters.");

        while game.phase() == Phase::Battle {
            print_boards(&game);
            let line = read_line("Enter target (e.g. E5): ")?;
            let Some(cell) = parse_coord(&line) else {
                println!("Invalid coordinate");
                continue;
            };
            match game.fire_at(cell) {
                Ok(ShotOutcome::Miss) => println!("Miss! The computer returns fire."),
                Ok(ShotOutcome::Hit) => println!("Direct hit! Fire again."),
                Ok(ShotOutcome::HitAndSunk(name)) => println!("You sunk the enemy {}!", name),
                Ok(ShotOutcome::AlreadyTargeted) => {}
                Err(GameError::IllegalTarget) => {
                    println!("That cell is not attackable; pick another.");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            replay_ai_turns(&mut game, &mut rng)?;
        }

        print_boards(&game);
        let stats = game.stats(Side::Human);
        match game.winner() {
            Some(Side::Human) => println!("\nVictory! You defeated the computer fleet."),
            Some(Side::Ai) => println!("\nDefeat! The computer has sunk your fleet."),
            None => {}
        }
        println!(
            "Shots fired: {}  Hits: {}  Ships sunk: {}",
            stats.shots_fired, stats.hits, stats.ships_sunk
        );

        if read_line("Play again? (y/n): ")?.to_ascii_lowercase() != "y" {
            return Ok(());
        }
    }
}

fn auto(mut rng: SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new();
    game.auto_place_remaining(&mut rng)?;
    game.start_battle(&mut rng)?;

    while game.phase() == Phase::Battle {
        if game.turn() == Side::Human {
            let cell = random_attackable(&game, &mut rng);
            let outcome = game.fire_at(cell)?;
            println!("Player fires at {}: {:?}", coord_to_string(cell), outcome);
        } else {
            let shot = game.ai_step(&mut rng)?;
            println!("Computer fires at {}: {:?}", coord_to_string(shot.cell), shot.outcome);
        }
    }

    print_boards(&game);
    println!("Winner: {:?}", game.winner());
    println!("Player stats:   {:?}", game.stats(Side::Human));
    println!("Computer stats: {:?}", game.stats(Side::Ai));
    Ok(())
}

/// Uniform draw over the enemy cells the player may still fire at.
fn random_attackable<R: Rng>(game: &Game, rng: &mut R) -> Coord {
    let view = game.view(Side::Ai, Side::Human);
    loop {
        let cell = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
        if matches!(view[cell.0][cell.1], CellState::Empty | CellState::Occupied) {
            return cell;
        }
    }
}
