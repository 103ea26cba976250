//! Arena - plays three-player chess games between configured agents
//!
//! A batch process that:
//! 1. Seats three agents from the roster (rotating colours every game)
//! 2. Plays each game to a king capture, a flag fall or the ply limit
//! 3. Logs every outcome and prints a per-agent summary
//! 4. Optionally writes the summary as JSON

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{error, info};

mod arena;
mod config;
mod game;
mod stats;

use crate::arena::{Arena, ArenaSettings};
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let settings = ArenaSettings {
        roster: config.agent_kinds()?,
        search: config.search_config(),
        mcrand_rollouts: config.mcrand_rollouts(),
        games: config.games,
        time_limit_ms: config.time_limit_ms,
        max_plies: config.max_plies,
        seed: config.base_seed(),
    };

    let mut arena = Arena::new(settings);
    let summary = match arena.run() {
        Ok(summary) => summary,
        Err(e) => {
            error!("Arena failed: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", summary.render_table());

    if let Some(path) = config.summary_path() {
        summary.write_json(Path::new(&path))?;
        info!(path = %path, "Summary written");
    }

    Ok(())
}
