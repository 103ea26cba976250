//! Pieces, their values and the movement catalog.
//!
//! A piece moves by repeating one [`StepPattern`] between one and
//! `max_reps` times. Directions are relative to the region the walker is
//! standing in; boards are expected to reverse them while the walker is in a
//! region its owner does not own.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::colour::Colour;

/// A single unit step, relative to the region the walker stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// The same step seen from the opposite side of the board.
    #[inline]
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A direction sequence and how many times a piece may repeat it in one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPattern {
    pub directions: &'static [Direction],
    pub max_reps: u8,
}

impl StepPattern {
    pub const fn new(directions: &'static [Direction], max_reps: u8) -> Self {
        Self {
            directions,
            max_reps,
        }
    }

    /// Whether this is a single straight step (used by pawn rules).
    pub fn is_straight(&self) -> bool {
        self.directions.len() == 1
    }
}

use Direction::{Backward as B, Forward as F, Left as L, Right as R};

const SLIDE: u8 = 8;

const PAWN: &[StepPattern] = &[
    StepPattern::new(&[F], 1),
    StepPattern::new(&[F, L], 1),
    StepPattern::new(&[F, R], 1),
];

const KNIGHT: &[StepPattern] = &[
    StepPattern::new(&[F, F, L], 1),
    StepPattern::new(&[F, F, R], 1),
    StepPattern::new(&[B, B, L], 1),
    StepPattern::new(&[B, B, R], 1),
    StepPattern::new(&[L, L, F], 1),
    StepPattern::new(&[L, L, B], 1),
    StepPattern::new(&[R, R, F], 1),
    StepPattern::new(&[R, R, B], 1),
];

const BISHOP: &[StepPattern] = &[
    StepPattern::new(&[F, L], SLIDE),
    StepPattern::new(&[F, R], SLIDE),
    StepPattern::new(&[B, L], SLIDE),
    StepPattern::new(&[B, R], SLIDE),
];

const ROOK: &[StepPattern] = &[
    StepPattern::new(&[F], SLIDE),
    StepPattern::new(&[B], SLIDE),
    StepPattern::new(&[L], SLIDE),
    StepPattern::new(&[R], SLIDE),
];

const QUEEN: &[StepPattern] = &[
    StepPattern::new(&[F], SLIDE),
    StepPattern::new(&[B], SLIDE),
    StepPattern::new(&[L], SLIDE),
    StepPattern::new(&[R], SLIDE),
    StepPattern::new(&[F, L], SLIDE),
    StepPattern::new(&[F, R], SLIDE),
    StepPattern::new(&[B, L], SLIDE),
    StepPattern::new(&[B, R], SLIDE),
];

const KING: &[StepPattern] = &[
    StepPattern::new(&[F], 1),
    StepPattern::new(&[B], 1),
    StepPattern::new(&[L], 1),
    StepPattern::new(&[R], 1),
    StepPattern::new(&[F, L], 1),
    StepPattern::new(&[F, R], 1),
    StepPattern::new(&[B, L], 1),
    StepPattern::new(&[B, R], 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value credited to whoever captures a piece of this kind.
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    /// The standard movement catalog for this kind.
    pub const fn patterns(self) -> &'static [StepPattern] {
        match self {
            PieceKind::Pawn => PAWN,
            PieceKind::Knight => KNIGHT,
            PieceKind::Bishop => BISHOP,
            PieceKind::Rook => ROOK,
            PieceKind::Queen => QUEEN,
            PieceKind::King => KING,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece on (or captured from) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
}

impl Piece {
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.colour.initial(), self.kind.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(PieceKind::Pawn.value(), 1);
        assert_eq!(PieceKind::Queen.value(), 9);
        assert!(PieceKind::King.value() > PieceKind::Queen.value());
    }

    #[test]
    fn test_reversed_is_involution() {
        for d in [F, B, L, R] {
            assert_ne!(d.reversed(), d);
            assert_eq!(d.reversed().reversed(), d);
        }
    }

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(PieceKind::Pawn.patterns().len(), 3);
        assert_eq!(PieceKind::Knight.patterns().len(), 8);
        assert_eq!(PieceKind::Queen.patterns().len(), 8);
        assert!(PieceKind::Rook.patterns().iter().all(|p| p.max_reps == SLIDE));
        assert!(PieceKind::King.patterns().iter().all(|p| p.max_reps == 1));
        assert!(PieceKind::Knight
            .patterns()
            .iter()
            .all(|p| p.directions.len() == 3));
    }

    #[test]
    fn test_piece_display() {
        let piece = Piece::new(PieceKind::Knight, Colour::Red);
        assert_eq!(piece.to_string(), "RN");
        assert_eq!(piece.value(), 3);
    }
}
