//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration shared by every agent variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fraction of the remaining clock a Monte Carlo search may spend.
    /// `None` ignores the clock entirely and relies on `max_rollouts`.
    pub time_fraction: Option<f64>,

    /// Fraction used instead once the clock drops below `late_threshold_ms`.
    pub late_fraction: f64,

    /// Remaining time below which the late-game policy applies: the smaller
    /// time fraction for rollouts, depth 1 for MaxN.
    pub late_threshold_ms: i64,

    /// Hard cap on rollouts per decision.
    pub max_rollouts: Option<u32>,

    /// Rollouts run per parallel batch. 1 keeps everything on the caller's
    /// thread.
    pub rollout_threads: usize,

    /// Rejection-sampling attempts before falling back to full enumeration.
    pub attempt_ceiling: u32,

    /// Plies searched by MaxN when not in the late game.
    pub depth_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_fraction: Some(0.1),
            late_fraction: 0.1,
            late_threshold_ms: 1000,
            max_rollouts: None,
            rollout_threads: 1,
            attempt_ceiling: 10_000,
            depth_limit: 2,
        }
    }
}

impl SearchConfig {
    /// Fixed-count Monte Carlo: the clock is ignored.
    pub fn fixed_rollouts(n: u32) -> Self {
        Self {
            time_fraction: None,
            max_rollouts: Some(n),
            ..Self::default()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_rollouts: Some(20),
            attempt_ceiling: 200,
            depth_limit: 1,
            ..Self::default()
        }
    }

    /// Builder pattern: set the clock fraction.
    pub fn with_time_fraction(mut self, fraction: f64) -> Self {
        self.time_fraction = Some(fraction);
        self
    }

    /// Builder pattern: cap the number of rollouts.
    pub fn with_max_rollouts(mut self, n: u32) -> Self {
        self.max_rollouts = Some(n);
        self
    }

    /// Builder pattern: set the parallel batch width.
    pub fn with_rollout_threads(mut self, threads: usize) -> Self {
        self.rollout_threads = threads.max(1);
        self
    }

    /// Builder pattern: set the MaxN depth limit.
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = depth;
        self
    }

    /// Builder pattern: set the rejection-sampling ceiling.
    pub fn with_attempt_ceiling(mut self, attempts: u32) -> Self {
        self.attempt_ceiling = attempts;
        self
    }
}
