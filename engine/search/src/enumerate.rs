//! Canonical legal-move enumeration.
//!
//! For every piece of the side to move, every movement pattern is walked one
//! repetition at a time until it leaves the board, hits an occupied square or
//! runs out of repetitions. Each square reached is offered to the board's
//! legality oracle. Moves are deduplicated by [`MoveKey`].
//!
//! [`Board::step`] takes `&self`, so walking never touches the board and no
//! per-direction clone is needed.

use std::collections::HashSet;

use board_core::{Board, Move, MoveKey, Position};

/// Every distinct legal move for the side to move, in discovery order.
///
/// Discovery order follows `Board::positions` and the movement catalog, but
/// callers should treat the result as an unordered set.
pub fn legal_moves<B: Board>(board: &B) -> Vec<Move> {
    let mut seen: HashSet<MoveKey> = HashSet::new();
    let mut moves = Vec::new();

    for start in board.positions(board.turn()) {
        for end in reachable(board, start) {
            let mv = Move::new(start, end);
            if !mv.is_null() && board.is_legal_move(mv) && seen.insert(mv.key()) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Squares a piece on `start` can walk to, before legality filtering.
///
/// Empty when `start` holds no piece.
pub fn reachable<B: Board>(board: &B, start: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(start) else {
        return Vec::new();
    };

    let mut squares = Vec::new();
    for pattern in board.movement_patterns(piece.kind) {
        let mut current = start;
        for _ in 0..pattern.max_reps {
            let reverse = start.colour() != current.colour();
            match board.step(piece, pattern.directions, current, reverse) {
                Ok(next) => current = next,
                Err(_) => break,
            }
            squares.push(current);
            if board.piece_at(current).is_some() {
                break;
            }
        }
    }
    squares
}
