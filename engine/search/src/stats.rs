//! Per-move rollout statistics and per-decision search counters.

use std::collections::HashMap;

use board_core::{Move, MoveKey};
use serde::{Deserialize, Serialize};

/// Aggregated rollouts that started with one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStat {
    pub mv: Move,
    pub games_played: u32,
    pub games_won: u32,
}

impl MoveStat {
    /// Fraction of recorded games credited as won.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        // games_played >= 1 for every stored entry
        f64::from(self.games_won) / f64::from(self.games_played)
    }
}

/// Rollout results keyed by first move, for a single decision.
///
/// Entries keep their first-seen order. [`best`](Self::best) scans in that
/// order and only replaces the leader on a strictly higher win rate, so the
/// earliest key wins ties.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    entries: Vec<MoveStat>,
    index: HashMap<MoveKey, usize>,
    total: u32,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished rollout that opened with `mv`.
    pub fn record(&mut self, mv: Move, won: bool) {
        let slot = *self.index.entry(mv.key()).or_insert_with(|| {
            self.entries.push(MoveStat {
                mv,
                games_played: 0,
                games_won: 0,
            });
            self.entries.len() - 1
        });
        let stat = &mut self.entries[slot];
        stat.games_played += 1;
        stat.games_won += u32::from(won);
        self.total += 1;
    }

    /// Fold another aggregator's results into this one.
    pub fn merge(&mut self, other: StatsAggregator) {
        for stat in other.entries {
            let slot = *self.index.entry(stat.mv.key()).or_insert_with(|| {
                self.entries.push(MoveStat {
                    games_played: 0,
                    games_won: 0,
                    ..stat
                });
                self.entries.len() - 1
            });
            self.entries[slot].games_played += stat.games_played;
            self.entries[slot].games_won += stat.games_won;
        }
        self.total += other.total;
    }

    /// Entry with the highest win rate, earliest first on ties.
    pub fn best(&self) -> Option<&MoveStat> {
        let mut best: Option<&MoveStat> = None;
        for stat in &self.entries {
            if best.map_or(true, |b| stat.win_rate() > b.win_rate()) {
                best = Some(stat);
            }
        }
        best
    }

    pub fn best_key(&self) -> Option<MoveKey> {
        self.best().map(|stat| stat.mv.key())
    }

    pub fn get(&self, key: MoveKey) -> Option<&MoveStat> {
        self.index.get(&key).map(|&slot| &self.entries[slot])
    }

    /// Rollouts recorded so far.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveStat> {
        self.entries.iter()
    }
}

/// Counters collected while making one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rollouts completed and recorded.
    pub rollouts: u32,
    /// Rollouts or branches dropped because the board refused a move.
    pub aborted: u32,
    /// MaxN nodes whose children were generated.
    pub nodes_expanded: u32,
    /// Boards evaluated at the MaxN frontier.
    pub leaves_evaluated: u32,
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Accumulate counters from another decision.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.rollouts += other.rollouts;
        self.aborted += other.aborted;
        self.nodes_expanded += other.nodes_expanded;
        self.leaves_evaluated += other.leaves_evaluated;
        self.elapsed_us += other.elapsed_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mv;

    #[test]
    fn test_record_counts() {
        let mut stats = StatsAggregator::new();
        let a = mv("BA2-BA3");
        let b = mv("BB1-BA3");

        stats.record(a, true);
        stats.record(a, false);
        stats.record(b, false);

        assert_eq!(stats.total(), 3);
        assert_eq!(stats.len(), 2);
        let sa = stats.get(a.key()).unwrap();
        assert_eq!((sa.games_played, sa.games_won), (2, 1));
        assert!((sa.win_rate() - 0.5).abs() < 1e-9);

        let played: u32 = stats.iter().map(|s| s.games_played).sum();
        assert_eq!(played, stats.total());
        assert!(stats.iter().all(|s| s.games_won <= s.games_played));
    }

    #[test]
    fn test_best_prefers_higher_rate() {
        let mut stats = StatsAggregator::new();
        stats.record(mv("BA2-BA3"), false);
        stats.record(mv("BB2-BB3"), true);
        stats.record(mv("BB2-BB3"), false);
        stats.record(mv("BC2-BC3"), true);

        assert_eq!(stats.best().unwrap().mv, mv("BC2-BC3"));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let mut stats = StatsAggregator::new();
        stats.record(mv("BH2-BH3"), true);
        stats.record(mv("BA2-BA3"), true);
        stats.record(mv("BC2-BC3"), true);

        assert_eq!(stats.best_key(), Some(mv("BH2-BH3").key()));
    }

    #[test]
    fn test_all_losses_still_pick_first() {
        let mut stats = StatsAggregator::new();
        stats.record(mv("BD2-BD3"), false);
        stats.record(mv("BE2-BE3"), false);
        assert_eq!(stats.best().unwrap().mv, mv("BD2-BD3"));
    }

    #[test]
    fn test_empty_has_no_best() {
        let stats = StatsAggregator::new();
        assert!(stats.is_empty());
        assert!(stats.best().is_none());
    }

    #[test]
    fn test_merge() {
        let mut left = StatsAggregator::new();
        left.record(mv("BA2-BA3"), true);

        let mut right = StatsAggregator::new();
        right.record(mv("BB2-BB3"), true);
        right.record(mv("BA2-BA3"), false);

        left.merge(right);
        assert_eq!(left.total(), 3);
        let a = left.get(mv("BA2-BA3").key()).unwrap();
        assert_eq!((a.games_played, a.games_won), (2, 1));
        assert_eq!(left.iter().next().unwrap().mv, mv("BA2-BA3"));
    }
}
