//! Single-ply capture heuristics.
//!
//! Each returns `None` when it finds no capture; callers fall back to a
//! random legal move.

use board_core::{Board, Move};
use rand_chacha::ChaCha20Rng;

use crate::enumerate::legal_moves;
use crate::playout::sample_move;

/// Value of the piece `mv` would take, if any.
#[inline]
fn capture_value<B: Board>(board: &B, mv: Move) -> Option<i32> {
    board.piece_at(mv.end).map(|piece| piece.value())
}

/// The legal move taking the most valuable piece. Earliest wins ties.
pub fn best_capture<B: Board>(board: &B) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in legal_moves(board) {
        if let Some(value) = capture_value(board, mv) {
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((mv, value));
            }
        }
    }
    best.map(|(mv, _)| mv)
}

/// Most valuable capture of the rival's pieces, else of anyone's.
pub fn grudge_capture<B: Board>(board: &B) -> Option<Move> {
    let rival = board.turn().rival();
    let mut on_rival: Option<(Move, i32)> = None;
    let mut on_other: Option<(Move, i32)> = None;

    for mv in legal_moves(board) {
        let Some(victim) = board.piece_at(mv.end) else {
            continue;
        };
        let slot = if victim.colour == rival {
            &mut on_rival
        } else {
            &mut on_other
        };
        if slot.map_or(true, |(_, v)| victim.value() > v) {
            *slot = Some((mv, victim.value()));
        }
    }
    on_rival.or(on_other).map(|(mv, _)| mv)
}

/// First capture hit by rejection sampling within `attempts` draws.
pub fn first_capture<B: Board>(board: &B, rng: &mut ChaCha20Rng, attempts: u32) -> Option<Move> {
    let starts = board.positions(board.turn());
    if starts.is_empty() {
        return None;
    }
    (0..attempts)
        .filter_map(|_| sample_move(board, &starts, rng))
        .find(|mv| board.piece_at(mv.end).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{kings_only, mv, piece, pos, queen_capture_board};
    use board_core::{Colour, PieceKind};
    use games_threechess::ThreeChessBoard;
    use rand::SeedableRng;

    /// Blue rook on BD1 can take a green knight on BD3 (rival) or slide
    /// right into a red queen on BH1.
    fn split_targets() -> ThreeChessBoard {
        ThreeChessBoard::empty()
            .with_piece(pos("BD1"), piece(PieceKind::Rook, Colour::Blue))
            .with_piece(pos("BD3"), piece(PieceKind::Knight, Colour::Green))
            .with_piece(pos("BH1"), piece(PieceKind::Queen, Colour::Red))
            .with_piece(pos("GE1"), piece(PieceKind::King, Colour::Green))
            .with_piece(pos("RE1"), piece(PieceKind::King, Colour::Red))
    }

    #[test]
    fn test_best_capture_takes_queen() {
        assert_eq!(best_capture(&queen_capture_board()), Some(mv("BA1-BA3")));
    }

    #[test]
    fn test_best_capture_prefers_value() {
        assert_eq!(best_capture(&split_targets()), Some(mv("BD1-BH1")));
    }

    #[test]
    fn test_no_capture_available() {
        assert_eq!(best_capture(&ThreeChessBoard::new()), None);
        assert_eq!(grudge_capture(&kings_only()), None);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(first_capture(&ThreeChessBoard::new(), &mut rng, 500), None);
    }

    #[test]
    fn test_grudge_capture_prefers_rival() {
        assert_eq!(grudge_capture(&split_targets()), Some(mv("BD1-BD3")));
    }

    #[test]
    fn test_grudge_capture_falls_back_to_others() {
        let board = ThreeChessBoard::empty()
            .with_piece(pos("BD1"), piece(PieceKind::Rook, Colour::Blue))
            .with_piece(pos("BD3"), piece(PieceKind::Pawn, Colour::Red));
        assert_eq!(grudge_capture(&board), Some(mv("BD1-BD3")));
    }

    #[test]
    fn test_first_capture_finds_only_capture() {
        let board = queen_capture_board();
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        assert_eq!(first_capture(&board, &mut rng, 10_000), Some(mv("BA1-BA3")));
    }
}
