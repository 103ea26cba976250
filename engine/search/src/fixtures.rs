//! Board fixtures shared by the unit tests.

use board_core::{Board, Colour, Direction, ImpossiblePosition, Move, Piece, PieceKind, Position};
use games_threechess::ThreeChessBoard;

pub fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

pub fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

pub fn piece(kind: PieceKind, colour: Colour) -> Piece {
    Piece::new(kind, colour)
}

/// Three kings on their home squares, Blue to move.
pub fn kings_only() -> ThreeChessBoard {
    ThreeChessBoard::empty()
        .with_piece(pos("BE1"), piece(PieceKind::King, Colour::Blue))
        .with_piece(pos("GE1"), piece(PieceKind::King, Colour::Green))
        .with_piece(pos("RE1"), piece(PieceKind::King, Colour::Red))
}

/// Blue's only capture is `BA1-BA3`, taking a green queen.
pub fn queen_capture_board() -> ThreeChessBoard {
    kings_only()
        .with_piece(pos("BA1"), piece(PieceKind::Rook, Colour::Blue))
        .with_piece(pos("BA3"), piece(PieceKind::Queen, Colour::Green))
}

/// A board that agrees `refused` is legal but will not play it.
///
/// Models a board whose legality check and move application disagree.
#[derive(Debug, Clone)]
pub struct RefusingBoard {
    pub inner: ThreeChessBoard,
    pub refused: Move,
}

impl RefusingBoard {
    pub fn new(inner: ThreeChessBoard, refused: Move) -> Self {
        Self { inner, refused }
    }
}

impl Board for RefusingBoard {
    fn turn(&self) -> Colour {
        self.inner.turn()
    }

    fn positions(&self, colour: Colour) -> Vec<Position> {
        self.inner.positions(colour)
    }

    fn piece_at(&self, position: Position) -> Option<Piece> {
        self.inner.piece_at(position)
    }

    fn step(
        &self,
        piece: Piece,
        directions: &[Direction],
        from: Position,
        reverse: bool,
    ) -> Result<Position, ImpossiblePosition> {
        self.inner.step(piece, directions, from, reverse)
    }

    fn is_legal_move(&self, mv: Move) -> bool {
        self.inner.is_legal_move(mv)
    }

    fn apply_move(&mut self, mv: Move, elapsed_ms: u64) -> Result<(), ImpossiblePosition> {
        if mv == self.refused {
            return Err(ImpossiblePosition::IllegalMove(mv));
        }
        self.inner.apply_move(mv, elapsed_ms)
    }

    fn captured(&self, colour: Colour) -> &[Piece] {
        self.inner.captured(colour)
    }

    fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    fn winner(&self) -> Option<Colour> {
        self.inner.winner()
    }

    fn loser(&self) -> Option<Colour> {
        self.inner.loser()
    }

    fn time_left_ms(&self, colour: Colour) -> i64 {
        self.inner.time_left_ms(colour)
    }
}
