use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use termchess_play::{Game, PlayConfig};

fn main() -> Result<()> {
    // Stdout carries the board, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("termchess starting");

    let interactive = io::stdout().is_terminal();
    let config = PlayConfig {
        clear_screen: interactive,
        color: interactive,
        ..PlayConfig::default()
    };

    let mut game = Game::new(config);
    game.run(io::stdin().lock(), io::stdout().lock())
        .context("terminal session failed")?;
    Ok(())
}
