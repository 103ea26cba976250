//! Player identities and turn order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three players. Also tags the board region a player starts in.
///
/// Turn order is Blue, Green, Red, then back to Blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Blue,
    Green,
    Red,
}

impl Colour {
    /// All players in turn order.
    pub const ALL: [Colour; 3] = [Colour::Blue, Colour::Green, Colour::Red];

    /// Number of players at the table.
    pub const COUNT: usize = 3;

    /// Slot of this player in a per-player array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Player for a slot index, wrapping around the table.
    #[inline]
    pub const fn from_index(index: usize) -> Colour {
        match index % Self::COUNT {
            0 => Colour::Blue,
            1 => Colour::Green,
            _ => Colour::Red,
        }
    }

    /// The player who moves after this one.
    #[inline]
    pub const fn next(self) -> Colour {
        Self::from_index(self.index() + 1)
    }

    /// The player who moved before this one.
    #[inline]
    pub const fn previous(self) -> Colour {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// The designated rival for grudge play: whoever moves immediately after us.
    #[inline]
    pub const fn rival(self) -> Colour {
        self.next()
    }

    /// Single-letter tag used in position names.
    pub const fn initial(self) -> char {
        match self {
            Colour::Blue => 'B',
            Colour::Green => 'G',
            Colour::Red => 'R',
        }
    }

    /// Inverse of [`Colour::initial`].
    pub fn from_initial(c: char) -> Option<Colour> {
        match c.to_ascii_uppercase() {
            'B' => Some(Colour::Blue),
            'G' => Some(Colour::Green),
            'R' => Some(Colour::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colour::Blue => "blue",
            Colour::Green => "green",
            Colour::Red => "red",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_order_wraps() {
        assert_eq!(Colour::Blue.next(), Colour::Green);
        assert_eq!(Colour::Green.next(), Colour::Red);
        assert_eq!(Colour::Red.next(), Colour::Blue);
        assert_eq!(Colour::Blue.previous(), Colour::Red);
    }

    #[test]
    fn test_rival_is_next_player() {
        for colour in Colour::ALL {
            assert_eq!(colour.rival(), colour.next());
            assert_ne!(colour.rival(), colour);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, colour) in Colour::ALL.iter().enumerate() {
            assert_eq!(colour.index(), i);
            assert_eq!(Colour::from_index(i), *colour);
        }
        assert_eq!(Colour::from_index(4), Colour::Green);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Colour::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let parsed: Colour = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, Colour::Red);
    }
}
