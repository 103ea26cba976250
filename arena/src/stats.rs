//! Arena results, per agent across all games.
//!
//! Summaries are printed as a table and optionally written as JSON.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use search::{AgentKind, SearchStats};
use serde::Serialize;
use tracing::debug;

use crate::game::{Ending, GameRecord};

/// Totals for one roster slot.
#[derive(Debug, Clone, Serialize)]
pub struct AgentTally {
    pub slot: usize,
    pub agent: AgentKind,
    pub label: &'static str,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub decisions: u32,
    pub thinking_ms: u64,
    pub by_search: u32,
    pub by_capture: u32,
    pub by_fallback: u32,
    pub by_random: u32,
    pub search: SearchStats,
}

impl AgentTally {
    fn new(slot: usize, agent: AgentKind) -> Self {
        Self {
            slot,
            agent,
            label: agent.label(),
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            decisions: 0,
            thinking_ms: 0,
            by_search: 0,
            by_capture: 0,
            by_fallback: 0,
            by_random: 0,
            search: SearchStats::default(),
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    pub fn avg_thinking_ms(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.thinking_ms as f64 / self.decisions as f64
        }
    }
}

/// Running totals over an arena session.
#[derive(Debug)]
pub struct ArenaStats {
    tallies: Vec<AgentTally>,
    games: u32,
    decided: u32,
    total_plies: u64,
    start_time: Instant,
}

/// Serializable summary for printing and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ArenaSummary {
    pub games: u32,
    pub decided: u32,
    pub draws: u32,
    pub avg_plies: f64,
    pub runtime_seconds: f64,
    pub agents: Vec<AgentTally>,
}

impl ArenaStats {
    pub fn new(roster: &[AgentKind]) -> Self {
        Self {
            tallies: roster
                .iter()
                .enumerate()
                .map(|(slot, &kind)| AgentTally::new(slot, kind))
                .collect(),
            games: 0,
            decided: 0,
            total_plies: 0,
            start_time: Instant::now(),
        }
    }

    /// Fold in one finished game. `seating[colour]` is the roster slot that
    /// played that colour.
    pub fn record_game(&mut self, record: &GameRecord, seating: [usize; 3]) {
        self.games += 1;
        self.total_plies += u64::from(record.plies);
        if record.ending == Ending::Decided {
            self.decided += 1;
        }

        for (colour_index, &slot) in seating.iter().enumerate() {
            let Some(tally) = self.tallies.get_mut(slot) else {
                continue;
            };
            let seat = &record.seats[colour_index];

            tally.games += 1;
            match record.ending {
                Ending::PlyLimit => tally.draws += 1,
                Ending::Decided => {
                    if record.winner.map(|c| c.index()) == Some(colour_index) {
                        tally.wins += 1;
                    }
                    if record.loser.map(|c| c.index()) == Some(colour_index) {
                        tally.losses += 1;
                    }
                }
            }
            tally.decisions += seat.decisions;
            tally.thinking_ms += seat.thinking_ms;
            tally.by_search += seat.by_search;
            tally.by_capture += seat.by_capture;
            tally.by_fallback += seat.by_fallback;
            tally.by_random += seat.by_random;
            tally.search.absorb(&seat.search);
        }
    }

    pub fn summary(&self) -> ArenaSummary {
        let avg_plies = if self.games > 0 {
            self.total_plies as f64 / self.games as f64
        } else {
            0.0
        };
        ArenaSummary {
            games: self.games,
            decided: self.decided,
            draws: self.games - self.decided,
            avg_plies,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
            agents: self.tallies.clone(),
        }
    }
}

impl ArenaSummary {
    /// Fixed-width results table.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:>6} {:>6} {:>6} {:>6} {:>7} {:>9} {:>9}",
            "slot", "agent", "games", "wins", "losses", "draws", "win%", "ms/move", "rollouts"
        );
        for t in &self.agents {
            let _ = writeln!(
                out,
                "{:<4} {:<8} {:>6} {:>6} {:>6} {:>6} {:>6.1}% {:>9.1} {:>9}",
                t.slot,
                t.label,
                t.games,
                t.wins,
                t.losses,
                t.draws,
                t.win_rate() * 100.0,
                t.avg_thinking_ms(),
                t.search.rollouts
            );
        }
        let _ = write!(
            out,
            "{} games ({} decided, {} drawn), {:.1} plies on average, {:.1}s",
            self.games, self.decided, self.draws, self.avg_plies, self.runtime_seconds
        );
        out
    }

    /// Write the summary as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "summary written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SeatRecord;
    use board_core::Colour;

    fn decided(winner: Colour, loser: Colour, plies: u32) -> GameRecord {
        let mut seats: [SeatRecord; 3] = Default::default();
        for seat in &mut seats {
            seat.decisions = plies / 3;
            seat.thinking_ms = u64::from(plies / 3) * 2;
            seat.by_search = plies / 3;
        }
        GameRecord {
            winner: Some(winner),
            loser: Some(loser),
            ending: Ending::Decided,
            plies,
            seats,
        }
    }

    fn roster() -> [AgentKind; 3] {
        [AgentKind::MaxN, AgentKind::Mcts, AgentKind::Random]
    }

    #[test]
    fn test_wins_follow_seating() {
        let mut stats = ArenaStats::new(&roster());
        // Slot 1 (MCTS) plays Blue and wins; slot 2 plays Green and loses.
        stats.record_game(&decided(Colour::Blue, Colour::Green, 30), [1, 2, 0]);

        let summary = stats.summary();
        assert_eq!(summary.games, 1);
        assert_eq!(summary.agents[1].wins, 1);
        assert_eq!(summary.agents[2].losses, 1);
        assert_eq!(summary.agents[0].wins + summary.agents[0].losses, 0);
        assert!(summary.agents.iter().all(|t| t.games == 1));
        assert_eq!(summary.agents[0].decisions, 10);
    }

    #[test]
    fn test_ply_limit_counts_as_draw() {
        let mut stats = ArenaStats::new(&roster());
        let mut record = decided(Colour::Red, Colour::Blue, 12);
        record.ending = Ending::PlyLimit;
        record.winner = None;
        record.loser = None;
        stats.record_game(&record, [0, 1, 2]);
        stats.record_game(&decided(Colour::Red, Colour::Blue, 18), [0, 1, 2]);

        let summary = stats.summary();
        assert_eq!(summary.decided, 1);
        assert_eq!(summary.draws, 1);
        assert!((summary.avg_plies - 15.0).abs() < f64::EPSILON);
        assert_eq!(summary.agents[2].wins, 1);
        assert!((summary.agents[2].win_rate() - 0.5).abs() < f64::EPSILON);
        assert!(summary.agents.iter().all(|t| t.draws == 1));
    }

    #[test]
    fn test_render_table_lists_every_slot() {
        let mut stats = ArenaStats::new(&roster());
        stats.record_game(&decided(Colour::Green, Colour::Red, 9), [0, 1, 2]);
        let table = stats.summary().render_table();

        assert!(table.starts_with("slot"));
        assert!(table.contains("MaxN"));
        assert!(table.contains("MCTS"));
        assert!(table.contains("Random"));
        assert!(table.contains("1 games (1 decided, 0 drawn)"));
    }

    #[test]
    fn test_summary_serializes() {
        let mut stats = ArenaStats::new(&roster());
        stats.record_game(&decided(Colour::Blue, Colour::Red, 3), [0, 1, 2]);
        let json = serde_json::to_value(stats.summary()).unwrap();

        assert_eq!(json["games"], 1);
        assert_eq!(json["agents"][0]["agent"], "maxn");
        assert_eq!(json["agents"][0]["wins"], 1);
        assert_eq!(json["agents"][2]["losses"], 1);
    }
}
