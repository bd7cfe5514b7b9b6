//! Detective Quest
//!
//! Explore the mansion, collect clues and accuse the culprit.

use anyhow::Context;
use detective_quest::config::{GameConfig, CONFIG_FILE};
use detective_quest::console::{self, Theme};
use detective_quest::{Game, Result};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = GameConfig::load_or_default(CONFIG_FILE)?;

    // Diagnostics go to stderr so they never mix with the game text
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let theme = Theme::detect();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    console::banner(&mut output, &theme)?;

    let mut game = Game::new(config).context("Failed to set up the mansion")?;
    game.run(&mut input, &mut output, &theme)?;

    console::farewell(&mut output, &theme)?;
    tracing::debug!(status = %game.check_status(), "session closed");

    Ok(())
}
