//! Move search and evaluation for three-player chess agents.
//!
//! This crate turns a board into a single move. It works against any type
//! implementing the `board-core` [`Board`](board_core::Board) trait and never
//! mutates the board it is handed: every simulation runs on a clone it owns.
//!
//! # Overview
//!
//! - [`legal_moves`]: canonical enumeration, deduplicated by `MoveKey`
//! - [`random_move`]: rejection-sampled uniform move with an enumeration
//!   fallback
//! - [`simulate`]: random playout of a clone to the end of the game
//! - [`StatsAggregator`]: per-first-move win counts for one decision
//! - [`material_utility`] / [`grudge_utility`]: capture-based utility vectors
//! - [`MaxNSearch`]: bounded-depth N-player search
//! - [`run_rollouts`]: budgeted flat Monte Carlo, optionally on a rayon pool
//! - [`Agent`]: the roster of playing strategies built from the above
//!
//! # Usage
//!
//! ```rust,ignore
//! use games_threechess::ThreeChessBoard;
//! use search::{Agent, AgentKind, SearchConfig};
//!
//! let board = ThreeChessBoard::new();
//! let mut agent = Agent::new(AgentKind::MaxN, SearchConfig::default(), Some(42));
//!
//! let decision = agent.choose_move(&board)?;
//! println!("{} ({:?})", decision.mv, decision.reason);
//! ```
//!
//! # Budgets
//!
//! A [`SearchBudget`] is derived from [`SearchConfig`] and the mover's clock
//! at the start of each decision. Monte Carlo agents spend a fraction of the
//! remaining time; once the clock falls under the late-game threshold the
//! fraction drops and MaxN searches a single ply.

pub mod agent;
pub mod budget;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod greedy;
pub mod maxn;
pub mod mcts;
pub mod playout;
pub mod rollout;
pub mod stats;
pub mod utility;

#[cfg(test)]
mod fixtures;

// Re-export main types
pub use agent::{
    Agent, AgentKind, Decision, DecisionReason, Strategy, UnknownAgent, MCRAND_ROLLOUTS,
};
pub use budget::SearchBudget;
pub use config::SearchConfig;
pub use enumerate::legal_moves;
pub use error::SearchError;
pub use greedy::{best_capture, first_capture, grudge_capture};
pub use maxn::{MaxNResult, MaxNSearch, ScoredMove};
pub use mcts::{run_rollouts, Crediting, RolloutSearch};
pub use playout::random_move;
pub use rollout::{simulate, simulate_from, Outcome, Rollout};
pub use stats::{MoveStat, SearchStats, StatsAggregator};
pub use utility::{grudge_utility, material_utility, Utility, UtilityMode};
