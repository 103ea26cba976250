//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate dir)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by THREECHESS_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("THREECHESS_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from THREECHESS_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "THREECHESS_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults with a
/// warning rather than failing.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, i64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
    // Optional string field
    ($config:expr, $section:ident . $field:ident, $key:expr, optional) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = Some(v);
        }
    };
    // Optional parseable field (Option<u32>, Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = Some(v);
        }
    };
    // Comma-separated list of strings
    ($config:expr, $section:ident . $field:ident, $key:expr, list) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: THREECHESS_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "THREECHESS_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "THREECHESS_COMMON_SEED", optional_parse);

    // Playout
    env_override!(
        config,
        playout.attempt_ceiling,
        "THREECHESS_PLAYOUT_ATTEMPT_CEILING",
        parse
    );

    // MCTS
    env_override!(
        config,
        mcts.time_fraction,
        "THREECHESS_MCTS_TIME_FRACTION",
        parse
    );
    env_override!(
        config,
        mcts.late_fraction,
        "THREECHESS_MCTS_LATE_FRACTION",
        parse
    );
    env_override!(
        config,
        mcts.late_threshold_ms,
        "THREECHESS_MCTS_LATE_THRESHOLD_MS",
        parse
    );
    env_override!(
        config,
        mcts.max_rollouts,
        "THREECHESS_MCTS_MAX_ROLLOUTS",
        optional_parse
    );
    env_override!(
        config,
        mcts.rollout_threads,
        "THREECHESS_MCTS_ROLLOUT_THREADS",
        parse
    );
    env_override!(
        config,
        mcts.mcrand_rollouts,
        "THREECHESS_MCTS_MCRAND_ROLLOUTS",
        parse
    );

    // MaxN
    env_override!(
        config,
        maxn.depth_limit,
        "THREECHESS_MAXN_DEPTH_LIMIT",
        parse
    );

    // Arena
    env_override!(config, arena.games, "THREECHESS_ARENA_GAMES", parse);
    env_override!(config, arena.agents, "THREECHESS_ARENA_AGENTS", list);
    env_override!(
        config,
        arena.time_limit_ms,
        "THREECHESS_ARENA_TIME_LIMIT_MS",
        parse
    );
    env_override!(
        config,
        arena.max_plies,
        "THREECHESS_ARENA_MAX_PLIES",
        parse
    );
    env_override!(
        config,
        arena.summary_path,
        "THREECHESS_ARENA_SUMMARY_PATH",
        optional
    );

    config
}
