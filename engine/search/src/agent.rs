//! Agent variants and the per-turn entry point.
//!
//! An agent is a thin policy object: a [`Strategy`], a [`UtilityMode`], a
//! [`SearchConfig`] and its own seeded generator. Every variant shares the
//! enumeration, rollout and utility machinery of this crate.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use board_core::{Board, Move};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::budget::SearchBudget;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::greedy::{best_capture, first_capture, grudge_capture};
use crate::maxn::MaxNSearch;
use crate::mcts::run_rollouts;
use crate::playout::random_move;
use crate::stats::SearchStats;
use crate::utility::UtilityMode;

/// Rollouts per decision for [`AgentKind::McRand`] unless configured.
pub const MCRAND_ROLLOUTS: u32 = 100;

/// How an agent turns a board into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    FirstKill,
    BestKill,
    GrudgeKill,
    MaxN,
    /// Monte Carlo rollouts. `fixed` ignores the clock.
    MonteCarlo { fixed: bool },
}

/// The agent roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "firstkill")]
    FirstKill,
    #[serde(rename = "bestkill")]
    BestKill,
    #[serde(rename = "grudge")]
    Grudge,
    #[serde(rename = "maxn")]
    MaxN,
    #[serde(rename = "maxn-grudge")]
    MaxNGrudge,
    #[serde(rename = "mcts")]
    Mcts,
    #[serde(rename = "mcts-grudge")]
    MctsGrudge,
    #[serde(rename = "mcrand")]
    McRand,
}

impl AgentKind {
    pub const ALL: [AgentKind; 9] = [
        AgentKind::Random,
        AgentKind::FirstKill,
        AgentKind::BestKill,
        AgentKind::Grudge,
        AgentKind::MaxN,
        AgentKind::MaxNGrudge,
        AgentKind::Mcts,
        AgentKind::MctsGrudge,
        AgentKind::McRand,
    ];

    /// Identifier accepted by [`FromStr`] and used in config files.
    pub const fn id(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::FirstKill => "firstkill",
            AgentKind::BestKill => "bestkill",
            AgentKind::Grudge => "grudge",
            AgentKind::MaxN => "maxn",
            AgentKind::MaxNGrudge => "maxn-grudge",
            AgentKind::Mcts => "mcts",
            AgentKind::MctsGrudge => "mcts-grudge",
            AgentKind::McRand => "mcrand",
        }
    }

    /// Short label for tables and logs.
    pub const fn label(self) -> &'static str {
        match self {
            AgentKind::Random => "Random",
            AgentKind::FirstKill => "FirstK",
            AgentKind::BestKill => "BestK",
            AgentKind::Grudge => "Grudge",
            AgentKind::MaxN => "MaxN",
            AgentKind::MaxNGrudge => "MaxNG",
            AgentKind::Mcts => "MCTS",
            AgentKind::MctsGrudge => "MCTSG",
            AgentKind::McRand => "MCRand",
        }
    }

    pub const fn strategy(self) -> Strategy {
        match self {
            AgentKind::Random => Strategy::Random,
            AgentKind::FirstKill => Strategy::FirstKill,
            AgentKind::BestKill => Strategy::BestKill,
            AgentKind::Grudge => Strategy::GrudgeKill,
            AgentKind::MaxN | AgentKind::MaxNGrudge => Strategy::MaxN,
            AgentKind::Mcts | AgentKind::MctsGrudge => Strategy::MonteCarlo { fixed: false },
            AgentKind::McRand => Strategy::MonteCarlo { fixed: true },
        }
    }

    pub const fn utility_mode(self) -> UtilityMode {
        match self {
            AgentKind::Grudge | AgentKind::MaxNGrudge | AgentKind::MctsGrudge => {
                UtilityMode::Grudge
            }
            _ => UtilityMode::Material,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent '{0}'")]
pub struct UnknownAgent(pub String);

impl FromStr for AgentKind {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted || kind.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownAgent(s.to_string()))
    }
}

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// MaxN improvement or best rollout statistics.
    Search,
    /// A greedy capture picked by a capture agent.
    Capture,
    /// Search found nothing better; greedy capture used instead.
    FallbackCapture,
    /// Random agent, or nothing else produced a move.
    Random,
}

/// One move, with how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub reason: DecisionReason,
    pub stats: SearchStats,
}

/// A configured player.
pub struct Agent {
    kind: AgentKind,
    config: SearchConfig,
    rng: ChaCha20Rng,
}

impl Agent {
    /// Create an agent. `seed` fixes its generator; `None` seeds from entropy.
    pub fn new(kind: AgentKind, config: SearchConfig, seed: Option<u64>) -> Self {
        let config = match kind.strategy() {
            Strategy::MonteCarlo { fixed: true } => SearchConfig {
                time_fraction: None,
                max_rollouts: Some(config.max_rollouts.unwrap_or(MCRAND_ROLLOUTS)),
                ..config
            },
            _ => config,
        };
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { kind, config, rng }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for the side to move on `board`.
    ///
    /// The board is only read; all simulation happens on clones. The returned
    /// move has been checked with [`Board::is_legal_move`].
    pub fn choose_move<B: Board>(&mut self, board: &B) -> Result<Decision, SearchError> {
        if board.is_game_over() {
            return Err(SearchError::GameOver);
        }
        let started = Instant::now();
        let mode = self.kind.utility_mode();
        let mut stats = SearchStats::default();

        let (mv, reason) = match self.kind.strategy() {
            Strategy::Random => (self.random(board)?, DecisionReason::Random),
            Strategy::BestKill => self.capture_or_random(board, best_capture(board))?,
            Strategy::GrudgeKill => self.capture_or_random(board, grudge_capture(board))?,
            Strategy::FirstKill => {
                let found = first_capture(board, &mut self.rng, self.config.attempt_ceiling);
                self.capture_or_random(board, found)?
            }
            Strategy::MaxN => {
                let time_left = board.time_left_ms(board.turn());
                let budget = SearchBudget::for_turn(&self.config, time_left);
                let mut search = MaxNSearch::new(mode, budget.depth_limit());
                let result = search.run(board)?;
                stats = *search.stats();

                match result.improving_move() {
                    Some(mv) => (mv, DecisionReason::Search),
                    None => {
                        let greedy = match mode {
                            UtilityMode::Material => best_capture(board),
                            UtilityMode::Grudge => grudge_capture(board),
                        };
                        match greedy {
                            Some(mv) => (mv, DecisionReason::FallbackCapture),
                            None => (self.random(board)?, DecisionReason::Random),
                        }
                    }
                }
            }
            Strategy::MonteCarlo { .. } => {
                let search = run_rollouts(board, &self.config, mode, &mut self.rng)?;
                stats = search.stats;
                match search.best() {
                    Some(best) => (best.mv, DecisionReason::Search),
                    None => (self.random(board)?, DecisionReason::Random),
                }
            }
        };

        if !board.is_legal_move(mv) {
            return Err(SearchError::IllegalChoice(mv));
        }
        stats.elapsed_us = started.elapsed().as_micros() as u64;

        debug!(
            agent = self.name(),
            colour = %board.turn(),
            %mv,
            ?reason,
            rollouts = stats.rollouts,
            nodes = stats.nodes_expanded,
            elapsed_us = stats.elapsed_us,
            "decision"
        );
        Ok(Decision { mv, reason, stats })
    }

    fn random<B: Board>(&mut self, board: &B) -> Result<Move, SearchError> {
        random_move(board, &mut self.rng, self.config.attempt_ceiling)
    }

    fn capture_or_random<B: Board>(
        &mut self,
        board: &B,
        capture: Option<Move>,
    ) -> Result<(Move, DecisionReason), SearchError> {
        match capture {
            Some(mv) => Ok((mv, DecisionReason::Capture)),
            None => Ok((self.random(board)?, DecisionReason::Random)),
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
