//! Uniform random move selection.
//!
//! Draws a random piece, a random pattern for it and a random repetition
//! count, walks it, and keeps the result if the board accepts it. After
//! `attempt_ceiling` misses the sampler gives up and picks uniformly from the
//! full enumeration instead, so it always terminates.

use board_core::{Board, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::enumerate::legal_moves;
use crate::error::SearchError;

/// One rejection-sampling draw. `None` if the walk left the board or the
/// board refused the move.
pub fn sample_move<B: Board>(
    board: &B,
    starts: &[Position],
    rng: &mut ChaCha20Rng,
) -> Option<Move> {
    let start = *starts.choose(rng)?;
    let piece = board.piece_at(start)?;
    let pattern = board.movement_patterns(piece.kind).choose(rng)?;
    if pattern.max_reps == 0 {
        return None;
    }
    let reps = rng.gen_range(1..=pattern.max_reps);
    let end = board.walk(piece, pattern.directions, start, reps).ok()?;

    let mv = Move::new(start, end);
    (!mv.is_null() && board.is_legal_move(mv)).then_some(mv)
}

/// A uniformly random legal move for the side to move.
pub fn random_move<B: Board>(
    board: &B,
    rng: &mut ChaCha20Rng,
    attempt_ceiling: u32,
) -> Result<Move, SearchError> {
    if board.is_game_over() {
        return Err(SearchError::GameOver);
    }
    let colour = board.turn();
    let starts = board.positions(colour);
    if starts.is_empty() {
        return Err(SearchError::NoLegalMove { colour });
    }

    for _ in 0..attempt_ceiling {
        if let Some(mv) = sample_move(board, &starts, rng) {
            return Ok(mv);
        }
    }

    trace!(%colour, attempt_ceiling, "sampler exhausted, enumerating");
    legal_moves(board)
        .choose(rng)
        .copied()
        .ok_or(SearchError::NoLegalMove { colour })
}
