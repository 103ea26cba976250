//! Arena session: seats the roster, plays every game, keeps the tallies.

use anyhow::Result;
use games_threechess::ThreeChessBoard;
use search::{Agent, AgentKind, SearchConfig, Strategy};
use tracing::{info, warn};

use crate::game::{play_game, Ending};
use crate::stats::{ArenaStats, ArenaSummary};

/// Session parameters, resolved from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct ArenaSettings {
    pub roster: [AgentKind; 3],
    pub search: SearchConfig,
    pub mcrand_rollouts: u32,
    pub games: u32,
    pub time_limit_ms: i64,
    pub max_plies: u32,
    pub seed: Option<u64>,
}

pub struct Arena {
    settings: ArenaSettings,
    agents: Vec<Agent>,
    stats: ArenaStats,
}

/// Roster slot for each colour in game `game`: slot `i` plays colour
/// `(i + game) % 3`, so every agent cycles through every seat.
pub fn seating_for(game: u32) -> [usize; 3] {
    let shift = (game % 3) as usize;
    [0, 1, 2].map(|colour| (colour + 3 - shift) % 3)
}

impl Arena {
    pub fn new(settings: ArenaSettings) -> Self {
        let agents = settings
            .roster
            .iter()
            .enumerate()
            .map(|(slot, &kind)| {
                let config = match kind.strategy() {
                    Strategy::MonteCarlo { fixed: true } => settings
                        .search
                        .clone()
                        .with_max_rollouts(settings.mcrand_rollouts),
                    _ => settings.search.clone(),
                };
                let seed = settings.seed.map(|s| s.wrapping_add(slot as u64));
                Agent::new(kind, config, seed)
            })
            .collect();
        let stats = ArenaStats::new(&settings.roster);
        Self {
            settings,
            agents,
            stats,
        }
    }

    /// Play every game and return the final summary.
    pub fn run(&mut self) -> Result<ArenaSummary> {
        info!(
            games = self.settings.games,
            roster = ?self.settings.roster.map(|k| k.label()),
            time_limit_ms = self.settings.time_limit_ms,
            "arena starting"
        );

        for game in 0..self.settings.games {
            let seating = seating_for(game);
            let board = ThreeChessBoard::with_time_limit(self.settings.time_limit_ms);
            let record = play_game(board, &mut self.agents, seating, self.settings.max_plies)?;

            let name = |colour: Option<board_core::Colour>| {
                colour
                    .map(|c| self.agents[seating[c.index()]].name())
                    .unwrap_or("-")
            };
            match record.ending {
                Ending::Decided => info!(
                    game = game + 1,
                    winner = name(record.winner),
                    loser = name(record.loser),
                    plies = record.plies,
                    "game over"
                ),
                Ending::PlyLimit => warn!(
                    game = game + 1,
                    plies = record.plies,
                    "game hit the ply limit, scored as a draw"
                ),
            }
            self.stats.record_game(&record, seating);
        }

        Ok(self.stats.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(roster: [AgentKind; 3], games: u32) -> ArenaSettings {
        ArenaSettings {
            roster,
            search: SearchConfig::for_testing(),
            mcrand_rollouts: 5,
            games,
            time_limit_ms: 150,
            max_plies: 2_000,
            seed: Some(11),
        }
    }

    #[test]
    fn test_seating_rotates_through_every_colour() {
        assert_eq!(seating_for(0), [0, 1, 2]);
        assert_eq!(seating_for(1), [2, 0, 1]);
        assert_eq!(seating_for(2), [1, 2, 0]);
        assert_eq!(seating_for(3), seating_for(0));

        for slot in 0..3 {
            let colours: Vec<usize> = (0..3)
                .map(|g| seating_for(g).iter().position(|&s| s == slot).unwrap())
                .collect();
            let mut sorted = colours.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2], "slot {slot} seats {colours:?}");
        }
    }

    #[test]
    fn test_mcrand_gets_configured_rollouts() {
        let arena = Arena::new(settings(
            [AgentKind::McRand, AgentKind::Random, AgentKind::Mcts],
            1,
        ));
        assert_eq!(arena.agents[0].config().max_rollouts, Some(5));
        assert_eq!(arena.agents[2].config().max_rollouts, Some(20));
    }

    #[test]
    fn test_short_session_tallies_every_game() {
        let mut arena = Arena::new(settings(
            [AgentKind::Random, AgentKind::BestKill, AgentKind::Grudge],
            3,
        ));
        let summary = arena.run().unwrap();

        assert_eq!(summary.games, 3);
        assert_eq!(summary.decided + summary.draws, 3);
        for tally in &summary.agents {
            assert_eq!(tally.games, 3);
            assert!(tally.wins + tally.losses <= 3);
            assert!(tally.decisions > 0);
        }
        let wins: u32 = summary.agents.iter().map(|t| t.wins).sum();
        assert_eq!(wins, summary.decided);
    }
}
