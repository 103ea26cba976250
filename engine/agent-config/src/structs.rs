//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_attempt_ceiling() -> u32 {
    defaults::attempt_ceiling()
}
fn d_time_fraction() -> f64 {
    defaults::time_fraction()
}
fn d_late_fraction() -> f64 {
    defaults::late_fraction()
}
fn d_late_threshold() -> i64 {
    defaults::late_threshold_ms()
}
fn d_rollout_threads() -> usize {
    defaults::rollout_threads()
}
fn d_mcrand_rollouts() -> u32 {
    defaults::mcrand_rollouts()
}
fn d_depth_limit() -> u32 {
    defaults::depth_limit()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_agents() -> Vec<String> {
    defaults::agents().to_vec()
}
fn d_time_limit() -> i64 {
    defaults::time_limit_ms()
}
fn d_max_plies() -> u32 {
    defaults::max_plies()
}

// ============================================================================
// Config structs
// ============================================================================

/// Root configuration, one field per `[section]` of config.toml.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub playout: PlayoutConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub maxn: MaxNConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Base seed for agent generators. Unset means entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: d_log_level(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayoutConfig {
    #[serde(default = "d_attempt_ceiling")]
    pub attempt_ceiling: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            attempt_ceiling: d_attempt_ceiling(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MctsConfig {
    #[serde(default = "d_time_fraction")]
    pub time_fraction: f64,
    #[serde(default = "d_late_fraction")]
    pub late_fraction: f64,
    #[serde(default = "d_late_threshold")]
    pub late_threshold_ms: i64,
    /// Hard cap on rollouts per decision, on top of the time allowance.
    #[serde(default)]
    pub max_rollouts: Option<u32>,
    #[serde(default = "d_rollout_threads")]
    pub rollout_threads: usize,
    #[serde(default = "d_mcrand_rollouts")]
    pub mcrand_rollouts: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_fraction: d_time_fraction(),
            late_fraction: d_late_fraction(),
            late_threshold_ms: d_late_threshold(),
            max_rollouts: None,
            rollout_threads: d_rollout_threads(),
            mcrand_rollouts: d_mcrand_rollouts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaxNConfig {
    #[serde(default = "d_depth_limit")]
    pub depth_limit: u32,
}

impl Default for MaxNConfig {
    fn default() -> Self {
        Self {
            depth_limit: d_depth_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    /// Agent ids seated Blue, Green, Red in that order.
    #[serde(default = "d_agents")]
    pub agents: Vec<String>,
    #[serde(default = "d_time_limit")]
    pub time_limit_ms: i64,
    /// Plies after which an unfinished game is scored as a draw.
    #[serde(default = "d_max_plies")]
    pub max_plies: u32,
    /// Where to write the JSON summary, if anywhere.
    #[serde(default)]
    pub summary_path: Option<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: d_games(),
            agents: d_agents(),
            time_limit_ms: d_time_limit(),
            max_plies: d_max_plies(),
            summary_path: None,
        }
    }
}
