//! Flat Monte Carlo rollout search.
//!
//! Each iteration draws a random first move, plays a random game from it on a
//! clone and credits the first move with the result. The loop stops when the
//! [`SearchBudget`] runs out; the budget is only checked between rollouts (or
//! between batches when running in parallel), so a started rollout always
//! finishes and is recorded.
//!
//! With `rollout_threads > 1` each batch runs on a rayon pool. Every rollout
//! gets its own clone and its own generator seeded from the caller's, and
//! results are recorded in batch order after the join, so a fixed seed gives
//! the same table for the same number of batches.

use board_core::{Board, Colour, Move};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::budget::SearchBudget;
use crate::config::SearchConfig;
use crate::enumerate::legal_moves;
use crate::error::SearchError;
use crate::playout::random_move;
use crate::rollout::{simulate_from, Outcome, Rollout};
use crate::stats::{MoveStat, SearchStats, StatsAggregator};
use crate::utility::UtilityMode;

/// How rollout outcomes are credited to the searching player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crediting {
    pub me: Colour,
    pub mode: UtilityMode,
}

impl Crediting {
    /// A plain win counts in material mode. In grudge mode the rival must
    /// also be the loser.
    pub fn credits(&self, outcome: Outcome) -> bool {
        match self.mode {
            UtilityMode::Material => outcome.winner == self.me,
            UtilityMode::Grudge => outcome.winner == self.me && outcome.loser == self.me.rival(),
        }
    }
}

/// Result of a rollout search.
#[derive(Debug, Clone)]
pub struct RolloutSearch {
    pub table: StatsAggregator,
    pub stats: SearchStats,
}

impl RolloutSearch {
    /// Best first move, `None` if no rollout completed.
    pub fn best(&self) -> Option<&MoveStat> {
        self.table.best()
    }
}

/// Run rollouts from `board` until the budget is spent.
///
/// Fails only if the side to move has no legal move at all. Rollouts the
/// board breaks are dropped and counted in [`SearchStats::aborted`].
pub fn run_rollouts<B: Board>(
    board: &B,
    config: &SearchConfig,
    mode: UtilityMode,
    rng: &mut ChaCha20Rng,
) -> Result<RolloutSearch, SearchError> {
    if board.is_game_over() {
        return Err(SearchError::GameOver);
    }
    let me = board.turn();
    if legal_moves(board).is_empty() {
        return Err(SearchError::NoLegalMove { colour: me });
    }
    let budget = SearchBudget::for_turn(config, board.time_left_ms(me));
    let crediting = Crediting { me, mode };

    let mut search = RolloutSearch {
        table: StatsAggregator::new(),
        stats: SearchStats::default(),
    };

    let pool = if config.rollout_threads > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.rollout_threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(error = %e, "rollout pool unavailable, running serially");
                None
            }
        }
    } else {
        None
    };

    let mut attempts = 0u32;
    while !budget.exhausted(attempts) {
        let results = match &pool {
            Some(pool) => {
                let batch = budget
                    .rollouts_remaining(attempts)
                    .map_or(config.rollout_threads, |left| {
                        config.rollout_threads.min(left as usize)
                    });
                let seeds: Vec<u64> = (0..batch).map(|_| rng.gen()).collect();
                pool.install(|| {
                    seeds
                        .into_par_iter()
                        .map(|seed| {
                            let mut rng = ChaCha20Rng::seed_from_u64(seed);
                            one_rollout(board, &mut rng, config.attempt_ceiling)
                        })
                        .collect::<Vec<_>>()
                })
            }
            None => vec![one_rollout(board, rng, config.attempt_ceiling)],
        };

        for result in results {
            attempts += 1;
            match result {
                Ok(rollout) => {
                    search
                        .table
                        .record(rollout.first_move, crediting.credits(rollout.outcome));
                    search.stats.rollouts += 1;
                }
                Err(e) => {
                    warn!(error = %e, "rollout discarded");
                    search.stats.aborted += 1;
                }
            }
        }
    }

    search.stats.elapsed_us = budget.elapsed().as_micros() as u64;
    debug!(
        %me,
        rollouts = search.stats.rollouts,
        aborted = search.stats.aborted,
        distinct = search.table.len(),
        allowance_ms = budget.allowance().map(|d| d.as_millis() as u64),
        elapsed_us = search.stats.elapsed_us,
        "rollout search complete"
    );
    Ok(search)
}

/// Draw a first move and play it out.
fn one_rollout<B: Board>(
    board: &B,
    rng: &mut ChaCha20Rng,
    attempt_ceiling: u32,
) -> Result<Rollout, SearchError> {
    let first: Move = random_move(board, rng, attempt_ceiling)?;
    let rollout = simulate_from(board, first, rng, attempt_ceiling);
    if let Ok(r) = &rollout {
        trace!(first = %r.first_move, plies = r.plies, "rollout");
    }
    rollout
}
