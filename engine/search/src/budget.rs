//! Per-decision time and rollout budget.

use std::time::{Duration, Instant};

use crate::config::SearchConfig;

/// Budget for one decision. Built when a turn starts, dropped when it ends.
///
/// Checked only between rollouts: an in-flight rollout always finishes.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    started: Instant,
    time_left_ms: i64,
    allowance: Option<Duration>,
    max_rollouts: Option<u32>,
    depth_limit: u32,
}

impl SearchBudget {
    /// Derive the budget for a player with `time_left_ms` on their clock.
    pub fn for_turn(config: &SearchConfig, time_left_ms: i64) -> Self {
        let late = time_left_ms < config.late_threshold_ms;
        let allowance = config.time_fraction.map(|fraction| {
            let fraction = if late { config.late_fraction } else { fraction };
            let ms = time_left_ms.max(0) as f64 * fraction;
            Duration::from_secs_f64(ms.max(0.0) / 1000.0)
        });
        let depth_limit = if late { 1 } else { config.depth_limit.max(1) };

        Self {
            started: Instant::now(),
            time_left_ms,
            allowance,
            max_rollouts: config.max_rollouts,
            depth_limit,
        }
    }

    /// Clock reading this budget was derived from.
    pub fn time_left_ms(&self) -> i64 {
        self.time_left_ms
    }

    /// Wall-clock time the search may spend, if it is clock bound.
    pub fn allowance(&self) -> Option<Duration> {
        self.allowance
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Rollouts still allowed by the cap, if any.
    pub fn rollouts_remaining(&self, done: u32) -> Option<u32> {
        self.max_rollouts.map(|cap| cap.saturating_sub(done))
    }

    /// Whether another rollout may start after `done` have completed.
    pub fn exhausted(&self, done: u32) -> bool {
        match (self.allowance, self.max_rollouts) {
            (None, None) => true,
            (allowance, cap) => {
                cap.is_some_and(|cap| done >= cap)
                    || allowance.is_some_and(|limit| self.elapsed() >= limit)
            }
        }
    }
}
