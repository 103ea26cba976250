//! Capture-based utility vectors.
//!
//! Both evaluators read only the capture lists. Material utility is a
//! zero-sum transfer of piece value from victim to capturer. Grudge utility
//! debits victims the same way, but the searching player is only credited for
//! pieces taken from their rival.

use std::fmt;
use std::ops::Index;

use board_core::{Board, Colour};
use serde::{Deserialize, Serialize};

/// One score per player, indexed by [`Colour`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Utility([i32; Colour::COUNT]);

impl Utility {
    pub const fn new(scores: [i32; Colour::COUNT]) -> Self {
        Self(scores)
    }

    /// Score of one player.
    #[inline]
    pub fn of(&self, colour: Colour) -> i32 {
        self.0[colour.index()]
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> [i32; Colour::COUNT] {
        self.0
    }
}

impl Index<Colour> for Utility {
    type Output = i32;

    fn index(&self, colour: Colour) -> &i32 {
        &self.0[colour.index()]
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b, g, r] = self.0;
        write!(f, "[B {b}, G {g}, R {r}]")
    }
}

/// Which utility function a search evaluates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityMode {
    #[default]
    Material,
    Grudge,
}

impl UtilityMode {
    /// Evaluate `board` from `searcher`'s point of view.
    ///
    /// `searcher` only matters in grudge mode.
    pub fn evaluate<B: Board>(self, board: &B, searcher: Colour) -> Utility {
        match self {
            UtilityMode::Material => material_utility(board),
            UtilityMode::Grudge => grudge_utility(board, searcher),
        }
    }
}

pub fn material_utility<B: Board>(board: &B) -> Utility {
    let mut scores = [0; Colour::COUNT];
    for capturer in Colour::ALL {
        for piece in board.captured(capturer) {
            scores[capturer.index()] += piece.value();
            scores[piece.colour.index()] -= piece.value();
        }
    }
    Utility(scores)
}

/// Like [`material_utility`], except `searcher` gains nothing for pieces that
/// do not belong to `searcher.rival()`.
pub fn grudge_utility<B: Board>(board: &B, searcher: Colour) -> Utility {
    let rival = searcher.rival();
    let mut scores = [0; Colour::COUNT];
    for capturer in Colour::ALL {
        for piece in board.captured(capturer) {
            if capturer != searcher || piece.colour == rival {
                scores[capturer.index()] += piece.value();
            }
            scores[piece.colour.index()] -= piece.value();
        }
    }
    Utility(scores)
}
