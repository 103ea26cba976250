//! Configuration for the arena runner
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use agent_config::{load_config, CentralConfig};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use search::{AgentKind, SearchConfig};
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_agents() -> String {
    CENTRAL_CONFIG.arena.agents.join(",")
}

fn default_time_limit() -> i64 {
    CENTRAL_CONFIG.arena.time_limit_ms
}

fn default_max_plies() -> u32 {
    CENTRAL_CONFIG.arena.max_plies
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_depth_limit() -> u32 {
    CENTRAL_CONFIG.maxn.depth_limit
}

fn default_time_fraction() -> f64 {
    CENTRAL_CONFIG.mcts.time_fraction
}

fn default_rollout_threads() -> usize {
    CENTRAL_CONFIG.mcts.rollout_threads
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Three-player chess arena - plays agents against each other")]
#[command(
    long_about = "Plays complete three-player chess games between three agents,
rotating seats every game, and prints a per-agent summary.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Comma-separated agent ids, seated Blue, Green, Red in the first game
    /// (random, firstkill, bestkill, grudge, maxn, maxn-grudge, mcts,
    /// mcts-grudge, mcrand)
    #[arg(long, default_value_t = default_agents())]
    pub agents: String,

    /// Clock per player in milliseconds
    #[arg(long, default_value_t = default_time_limit())]
    pub time_limit_ms: i64,

    /// Plies after which a game is scored as a draw
    #[arg(long, default_value_t = default_max_plies())]
    pub max_plies: u32,

    /// MaxN search depth
    #[arg(long, default_value_t = default_depth_limit())]
    pub depth_limit: u32,

    /// Fraction of the remaining clock each Monte Carlo decision may spend
    #[arg(long, default_value_t = default_time_fraction())]
    pub time_fraction: f64,

    /// Rollouts per parallel batch (1 = serial)
    #[arg(long, default_value_t = default_rollout_threads())]
    pub rollout_threads: usize,

    /// Base seed for the agents' generators (omit for entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the summary as JSON to this path (falls back to
    /// `arena.summary_path` from config)
    #[arg(long)]
    pub summary_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.time_limit_ms <= 0 {
            return Err(anyhow!("time_limit_ms must be greater than 0"));
        }

        if self.max_plies == 0 {
            return Err(anyhow!("max_plies must be greater than 0"));
        }

        if self.depth_limit == 0 {
            return Err(anyhow!("depth_limit must be at least 1"));
        }

        if !(self.time_fraction > 0.0 && self.time_fraction <= 1.0) {
            return Err(anyhow!(
                "time_fraction must be in (0, 1], got {}",
                self.time_fraction
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "Invalid log_level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            ));
        }

        self.agent_kinds()?;
        Ok(())
    }

    /// The three agents in roster order.
    pub fn agent_kinds(&self) -> Result<[AgentKind; 3]> {
        let kinds = self
            .agents
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<AgentKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid --agents")?;

        <[AgentKind; 3]>::try_from(kinds).map_err(|kinds| {
            anyhow!(
                "exactly three agents are required, got {}",
                kinds.len()
            )
        })
    }

    /// Base seed: CLI first, then `common.seed` from config.
    pub fn base_seed(&self) -> Option<u64> {
        self.base_seed_from(&CENTRAL_CONFIG)
    }

    fn base_seed_from(&self, central: &CentralConfig) -> Option<u64> {
        self.seed.or(central.common.seed)
    }

    /// JSON summary destination: CLI first, then `arena.summary_path`.
    pub fn summary_path(&self) -> Option<String> {
        self.summary_path_from(&CENTRAL_CONFIG)
    }

    fn summary_path_from(&self, central: &CentralConfig) -> Option<String> {
        self.summary_path
            .clone()
            .or_else(|| central.arena.summary_path.clone())
    }

    /// Search parameters shared by every agent in the arena.
    pub fn search_config(&self) -> SearchConfig {
        let central = &*CENTRAL_CONFIG;
        SearchConfig {
            time_fraction: Some(self.time_fraction),
            late_fraction: central.mcts.late_fraction,
            late_threshold_ms: central.mcts.late_threshold_ms,
            max_rollouts: central.mcts.max_rollouts,
            rollout_threads: self.rollout_threads.max(1),
            attempt_ceiling: central.playout.attempt_ceiling,
            depth_limit: self.depth_limit,
        }
    }

    /// Rollout cap for the fixed-count Monte Carlo agent.
    pub fn mcrand_rollouts(&self) -> u32 {
        CENTRAL_CONFIG.mcts.mcrand_rollouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Config {
        let mut argv = vec!["arena"];
        argv.extend_from_slice(extra);
        Config::parse_from(argv)
    }

    #[test]
    fn test_defaults_validate() {
        let config = args(&[]);
        assert!(config.validate().is_ok());
        assert_eq!(config.games, 10);
        assert_eq!(config.agent_kinds().unwrap().len(), 3);
    }

    #[test]
    fn test_agent_parsing() {
        let config = args(&["--agents", "MaxNG, mcts ,random"]);
        assert_eq!(
            config.agent_kinds().unwrap(),
            [AgentKind::MaxNGrudge, AgentKind::Mcts, AgentKind::Random]
        );
    }

    #[test]
    fn test_rejects_wrong_agent_count() {
        let config = args(&["--agents", "maxn,mcts"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_agent() {
        let config = args(&["--agents", "maxn,alphazero,random"]);
        let err = config.agent_kinds().unwrap_err();
        assert!(format!("{err:#}").contains("alphazero"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(args(&["--games", "0"]).validate().is_err());
        assert!(args(&["--time-fraction", "1.5"]).validate().is_err());
        assert!(args(&["--log-level", "loud"]).validate().is_err());
        assert!(args(&["--depth-limit", "0"]).validate().is_err());
    }

    #[test]
    fn test_summary_path_falls_back_to_central_config() {
        let mut central = CentralConfig::default();
        central.arena.summary_path = Some("runs/summary.json".into());
        central.common.seed = Some(9);

        let config = args(&[]);
        assert_eq!(
            config.summary_path_from(&central).as_deref(),
            Some("runs/summary.json")
        );
        assert_eq!(config.base_seed_from(&central), Some(9));

        let config = args(&["--summary-path", "cli.json", "--seed", "3"]);
        assert_eq!(config.summary_path_from(&central).as_deref(), Some("cli.json"));
        assert_eq!(config.base_seed_from(&central), Some(3));

        let config = args(&[]);
        assert_eq!(config.summary_path_from(&CentralConfig::default()), None);
    }

    #[test]
    fn test_search_config_from_args() {
        let config = args(&["--depth-limit", "3", "--rollout-threads", "0"]);
        let search = config.search_config();
        assert_eq!(search.depth_limit, 3);
        assert_eq!(search.rollout_threads, 1);
        assert_eq!(search.time_fraction, Some(config.time_fraction));
    }
}
