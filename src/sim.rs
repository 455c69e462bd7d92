#![cfg(feature = "std")]

//! Headless games for soak-testing placement and the turn loop.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::{
    config::Settings,
    game::{Clock, GameSession, GameState, ManualClock},
};

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub settings: Settings,
    pub state: GameState,
    pub shots: usize,
    pub failures: u32,
    pub placement_episodes: u32,
    pub elapsed_secs: u64,
}

/// Play one game with a shooter that attacks every cell once, in random
/// order. The clock advances by `seconds_per_shot` before each shot.
pub fn simulate(seed: u64, settings: &Settings, seconds_per_shot: u64) -> anyhow::Result<SimReport> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let clock = ManualClock::new();
    let mut session = GameSession::new(settings, &mut rng, &clock);

    let size = session.defender().size();
    let mut targets: Vec<(usize, usize)> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .collect();
    targets.shuffle(&mut rng);

    let mut shots = 0;
    let mut state = session.state();
    for (row, col) in targets {
        if state.is_terminal() {
            break;
        }
        clock.advance(Duration::from_secs(seconds_per_shot));
        state = session.fire(row, col)?.state;
        shots += 1;
    }
    log::debug!("simulated game {} ended {:?} after {} shots", seed, state, shots);

    Ok(SimReport {
        seed,
        settings: *settings,
        state,
        shots,
        failures: session.failures(),
        placement_episodes: session.placement().map_or(0, |p| p.episodes),
        elapsed_secs: clock.now().as_secs(),
    })
}
