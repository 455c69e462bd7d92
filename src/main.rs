#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{init_logging, run_menu, BoardSize, Difficulty, Settings, SystemClock};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = BoardSize::Standard)]
    size: BoardSize,
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
    #[arg(long, help = "Failed-attempt budget; selects the custom difficulty")]
    attempts: Option<u32>,
    #[arg(long, help = "Time limit in minutes")]
    time: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = Settings::new();
    settings.size = cli.size;
    settings.set_difficulty(cli.difficulty);
    if let Some(n) = cli.attempts {
        settings
            .set_attempts(Difficulty::Custom, n)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(minutes) = cli.time {
        settings
            .set_time_limit(minutes)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (fleets will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let clock = SystemClock::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_menu(&mut settings, &mut rng, &clock, &mut input, &mut output)
}
