use clap::Parser;
use salvo::{simulate, BoardSize, Difficulty, Settings};

/// Play headless games and print one JSON report per game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long, value_enum, default_value_t = BoardSize::Standard)]
    size: BoardSize,
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
    /// Simulated seconds that pass before each shot.
    #[arg(long, default_value_t = 1)]
    seconds_per_shot: u64,
}

fn main() -> anyhow::Result<()> {
    salvo::init_logging();
    let args = Args::parse();

    let mut settings = Settings::new();
    settings.size = args.size;
    settings.set_difficulty(args.difficulty);

    for i in 0..args.games {
        let report = simulate(args.seed.wrapping_add(i), &settings, args.seconds_per_shot)?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
