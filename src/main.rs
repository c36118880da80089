//! Sushi Neko entry point
//!
//! Headless demo: the cat plays itself for a few sessions on the fixed
//! timestep and the best score is kept in the on-disk store.

use anyhow::{Context, Result};

use sushi_neko::sim::IdleMode;
use sushi_neko::{FileStore, Session, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Sushi Neko (headless) starting...");

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path);

    let store = FileStore::open(&settings.store_path)
        .with_context(|| format!("opening store {}", settings.store_path.display()))?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let mut session = Session::new(seed, &settings, store);
    session.set_idle(Some(IdleMode {
        strike_interval: settings.demo_strike_interval,
    }));
    println!("Highscore: {}", session.high_score());

    for game in 1..=settings.demo_sessions {
        let Some(ticks) = session.run_game(settings.demo_max_ticks) else {
            log::warn!(
                "Game {} still running after {} ticks, stopping the demo",
                game,
                settings.demo_max_ticks
            );
            break;
        };

        let state = session.state();
        println!(
            "Game {}: score {} in {} ticks{}",
            game,
            state.score(),
            ticks,
            if session.new_record() { " (new high score!)" } else { "" }
        );
    }

    println!("Highscore: {}", session.high_score());
    Ok(())
}
