//! Random playouts to the end of the game.

use board_core::{Board, Colour, Move};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::error::SearchError;
use crate::playout::random_move;

/// Clock cost charged for every simulated move.
pub const SIMULATED_MOVE_MS: u64 = 1;

/// How a finished game ended. The third player neither won nor lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Colour,
    pub loser: Colour,
}

impl Outcome {
    /// Read the outcome off a finished board.
    pub fn from_board<B: Board>(board: &B) -> Option<Self> {
        match (board.winner(), board.loser()) {
            (Some(winner), Some(loser)) => Some(Self { winner, loser }),
            _ => None,
        }
    }
}

/// Result of one rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollout {
    /// Move played first on the clone.
    pub first_move: Move,
    pub outcome: Outcome,
    /// Plies played, the first move included.
    pub plies: u32,
}

/// Clone `board`, play `first_move`, then random moves until the game ends.
///
/// The caller's board is never touched. A board that refuses a move it
/// reported as legal aborts the rollout with [`SearchError::MoveRejected`].
pub fn simulate_from<B: Board>(
    board: &B,
    first_move: Move,
    rng: &mut ChaCha20Rng,
    attempt_ceiling: u32,
) -> Result<Rollout, SearchError> {
    let mut sim = board.clone();
    sim.apply_move(first_move, SIMULATED_MOVE_MS)
        .map_err(|e| SearchError::rejected(first_move, e))?;

    let mut plies = 1;
    while !sim.is_game_over() {
        let mv = random_move(&sim, rng, attempt_ceiling)?;
        sim.apply_move(mv, SIMULATED_MOVE_MS)
            .map_err(|e| SearchError::rejected(mv, e))?;
        plies += 1;
    }

    let outcome = Outcome::from_board(&sim).ok_or(SearchError::GameOver)?;
    trace!(
        first = %first_move,
        winner = %outcome.winner,
        loser = %outcome.loser,
        plies,
        "rollout complete"
    );
    Ok(Rollout {
        first_move,
        outcome,
        plies,
    })
}

/// A full random playout from `board`, first move included.
pub fn simulate<B: Board>(
    board: &B,
    rng: &mut ChaCha20Rng,
    attempt_ceiling: u32,
) -> Result<Rollout, SearchError> {
    let first_move = random_move(board, rng, attempt_ceiling)?;
    simulate_from(board, first_move, rng, attempt_ceiling)
}
