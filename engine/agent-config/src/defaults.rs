//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time and parsed once.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    playout: PlayoutDefaults,
    mcts: MctsDefaults,
    maxn: MaxNDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct PlayoutDefaults {
    attempt_ceiling: u32,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    time_fraction: f64,
    late_fraction: f64,
    late_threshold_ms: i64,
    rollout_threads: usize,
    mcrand_rollouts: u32,
}

#[derive(Debug, Deserialize)]
struct MaxNDefaults {
    depth_limit: u32,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    agents: Vec<String>,
    time_limit_ms: i64,
    max_plies: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Playout
pub fn attempt_ceiling() -> u32 {
    DEFAULTS.playout.attempt_ceiling
}

// MCTS
pub fn time_fraction() -> f64 {
    DEFAULTS.mcts.time_fraction
}
pub fn late_fraction() -> f64 {
    DEFAULTS.mcts.late_fraction
}
pub fn late_threshold_ms() -> i64 {
    DEFAULTS.mcts.late_threshold_ms
}
pub fn rollout_threads() -> usize {
    DEFAULTS.mcts.rollout_threads
}
pub fn mcrand_rollouts() -> u32 {
    DEFAULTS.mcts.mcrand_rollouts
}

// MaxN
pub fn depth_limit() -> u32 {
    DEFAULTS.maxn.depth_limit
}

// Arena
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn agents() -> &'static [String] {
    &DEFAULTS.arena.agents
}
pub fn time_limit_ms() -> i64 {
    DEFAULTS.arena.time_limit_ms
}
pub fn max_plies() -> u32 {
    DEFAULTS.arena.max_plies
}
