use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_cli::{config::Config, render::render_round};
use game_core::{GameSession, RandomSource, RngSource, Roster, WordBank};
use game_types::RoundSettings;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Impostor round driver...");

    let config = Config::new()?;

    let word_bank = match &config.words_file {
        Some(path) => {
            info!("Loading word bank from {}", path.display());
            WordBank::from_path(path)
                .with_context(|| format!("Failed to load word bank {}", path.display()))?
        }
        None => WordBank::builtin().context("Built-in word bank is malformed")?,
    };
    info!(
        "Word bank ready: {} categories, {} words",
        word_bank.len(),
        word_bank.word_count()
    );

    let mut roster = Roster::new();
    for name in &config.players {
        roster
            .add(name)
            .with_context(|| format!("Cannot add player {}", name))?;
    }

    let settings = RoundSettings {
        impostor_count: config.impostor_count,
        hint_mode: config.hint_mode,
        troll_mode: config.troll_mode,
        selected_categories: config.categories.clone(),
    };
    let mut session = GameSession::new(roster, settings);

    let mut rng: Box<dyn RandomSource> = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };

    for _ in 0..config.rounds {
        let outcome = session.start_round(&word_bank, rng.as_mut())?;
        let round_number = outcome.history.round_counter;

        if config.json_output {
            println!("{}", serde_json::to_string(&outcome.round)?);
        } else {
            println!("{}", render_round(round_number, outcome));
        }
    }

    info!(
        "Session finished after {} rounds",
        session.history().round_counter
    );
    Ok(())
}
