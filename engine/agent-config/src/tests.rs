//! Tests for the configuration module.

use super::*;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert!(config.common.seed.is_none());
    assert_eq!(config.playout.attempt_ceiling, 10_000);
    assert_eq!(config.maxn.depth_limit, 2);
}

#[test]
fn test_mcts_defaults() {
    let config = CentralConfig::default();
    assert!((config.mcts.time_fraction - 0.1).abs() < f64::EPSILON);
    assert!((config.mcts.late_fraction - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.mcts.late_threshold_ms, 1000);
    assert!(config.mcts.max_rollouts.is_none());
    assert_eq!(config.mcts.rollout_threads, 1);
    assert_eq!(config.mcts.mcrand_rollouts, 100);
}

#[test]
fn test_arena_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.arena.games, 10);
    assert_eq!(config.arena.agents, vec!["maxn", "mcts", "bestkill"]);
    assert_eq!(config.arena.time_limit_ms, 300_000);
    assert_eq!(config.arena.max_plies, 3000);
    assert!(config.arena.summary_path.is_none());
}

#[test]
fn test_threechess_env_overrides() {
    std::env::set_var("THREECHESS_COMMON_SEED", "42");
    std::env::set_var("THREECHESS_MAXN_DEPTH_LIMIT", "3");
    std::env::set_var("THREECHESS_MCTS_TIME_FRACTION", "0.25");
    std::env::set_var("THREECHESS_ARENA_AGENTS", "random, mcts-grudge ,maxn");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.common.seed, Some(42));
    assert_eq!(config.maxn.depth_limit, 3);
    assert!((config.mcts.time_fraction - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.arena.agents, vec!["random", "mcts-grudge", "maxn"]);

    std::env::remove_var("THREECHESS_COMMON_SEED");
    std::env::remove_var("THREECHESS_MAXN_DEPTH_LIMIT");
    std::env::remove_var("THREECHESS_MCTS_TIME_FRACTION");
    std::env::remove_var("THREECHESS_ARENA_AGENTS");
}

#[test]
fn test_unparseable_env_is_ignored() {
    std::env::set_var("THREECHESS_PLAYOUT_ATTEMPT_CEILING", "lots");
    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.playout.attempt_ceiling, 10_000);
    std::env::remove_var("THREECHESS_PLAYOUT_ATTEMPT_CEILING");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"
seed = 7

[mcts]
time_fraction = 0.05
max_rollouts = 500
rollout_threads = 4

[arena]
games = 3
agents = ["mcts", "mcts-grudge", "random"]
summary_path = "results.json"
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.common.seed, Some(7));
    assert!((config.mcts.time_fraction - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.mcts.max_rollouts, Some(500));
    assert_eq!(config.mcts.rollout_threads, 4);
    assert_eq!(config.arena.games, 3);
    assert_eq!(config.arena.agents[1], "mcts-grudge");
    assert_eq!(config.arena.summary_path.as_deref(), Some("results.json"));
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[maxn]
depth_limit = 4
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.maxn.depth_limit, 4);
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.mcts.mcrand_rollouts, 100); // Default
    assert_eq!(config.arena.time_limit_ms, 300_000); // Default
}

#[test]
fn test_load_from_missing_path_falls_back() {
    let config = load_from_path(std::path::Path::new("/nonexistent/threechess.toml"));
    assert_eq!(config.arena.games, 10);
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.arena.agents, cloned.arena.agents);
    assert_eq!(config.maxn.depth_limit, cloned.maxn.depth_limit);
}
