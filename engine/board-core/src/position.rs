//! Board coordinates and moves.
//!
//! The board is three regions of `ROWS` x `COLUMNS` squares, one per colour.
//! A position names the region, then the row counted from that colour's back
//! rank, then the column counted from that colour's left.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::board::ImpossiblePosition;
use crate::codec::MoveKey;
use crate::colour::Colour;

/// Rows per region.
pub const ROWS: u8 = 4;

/// Columns per region.
pub const COLUMNS: u8 = 8;

/// A square on the board. Structural equality; always within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    colour: Colour,
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position, rejecting coordinates outside the region.
    pub fn new(colour: Colour, row: u8, column: u8) -> Result<Self, ImpossiblePosition> {
        if row >= ROWS || column >= COLUMNS {
            return Err(ImpossiblePosition::OutOfRange { row, column });
        }
        Ok(Self {
            colour,
            row,
            column,
        })
    }

    /// Region this square belongs to.
    #[inline]
    pub const fn colour(self) -> Colour {
        self.colour
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Every square on the board, region by region.
    pub fn all() -> impl Iterator<Item = Position> {
        Colour::ALL.into_iter().flat_map(|colour| {
            (0..ROWS).flat_map(move |row| {
                (0..COLUMNS).map(move |column| Position {
                    colour,
                    row,
                    column,
                })
            })
        })
    }
}

impl fmt::Display for Position {
    /// Formats as region initial, column letter, one-based row: `BE1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.colour.initial(),
            (b'A' + self.column) as char,
            self.row + 1
        )
    }
}

impl FromStr for Position {
    type Err = ImpossiblePosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || ImpossiblePosition::Unparseable(s.to_string());
        let mut chars = s.trim().chars();
        let colour = chars
            .next()
            .and_then(Colour::from_initial)
            .ok_or_else(unparseable)?;
        let column = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase() as u8 - b'A')
            .ok_or_else(unparseable)?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|d| *d >= 1)
            .map(|d| d as u8 - 1)
            .ok_or_else(unparseable)?;
        if chars.next().is_some() {
            return Err(unparseable());
        }
        Position::new(colour, row, column)
    }
}

/// A move is just its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
}

impl Move {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True for the degenerate zero-displacement move.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.start == self.end
    }

    /// Dense key for deduplication and statistics.
    #[inline]
    pub fn key(&self) -> MoveKey {
        MoveKey::encode(*self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Move {
    type Err = ImpossiblePosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ImpossiblePosition::Unparseable(s.to_string()))?;
        Ok(Move::new(start.parse()?, end.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Position::new(Colour::Blue, 3, 7).is_ok());
        assert_eq!(
            Position::new(Colour::Blue, 4, 0),
            Err(ImpossiblePosition::OutOfRange { row: 4, column: 0 })
        );
        assert!(Position::new(Colour::Red, 0, 8).is_err());
    }

    #[test]
    fn test_all_covers_board_once() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 3 * ROWS as usize * COLUMNS as usize);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_display_and_parse() {
        let pos = Position::new(Colour::Green, 0, 4).unwrap();
        assert_eq!(pos.to_string(), "GE1");
        assert_eq!("GE1".parse::<Position>().unwrap(), pos);
        assert_eq!("ge1".parse::<Position>().unwrap(), pos);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("XE1".parse::<Position>().is_err());
        assert!("BE0".parse::<Position>().is_err());
        assert!("BE5".parse::<Position>().is_err());
        assert!("BI1".parse::<Position>().is_err());
        assert!("BE12".parse::<Position>().is_err());
    }

    #[test]
    fn test_move_parse_and_null() {
        let mv: Move = "BA2-BA3".parse().unwrap();
        assert_eq!(mv.start.row(), 1);
        assert_eq!(mv.end.row(), 2);
        assert!(!mv.is_null());
        assert!(Move::new(mv.start, mv.start).is_null());
        assert_eq!(mv.to_string(), "BA2-BA3");
    }
}
