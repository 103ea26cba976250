//! Dense integer keys for moves.
//!
//! The key is a bit-field, most significant band first:
//! * Bits 18-19 : Start region (1 = blue, 2 = green, 3 = red)
//! * Bits 14-17 : Start row
//! * Bits 10-13 : Start column
//! * Bits 8-9   : End region
//! * Bits 4-7   : End row
//! * Bits 0-3   : End column
//!
//! Every field fits its band for any in-range [`Position`], so two distinct
//! moves never share a key. The key is a lookup aid, not a wire format.

use std::fmt;

use crate::colour::Colour;
use crate::position::{Move, Position};

const COLUMN_BITS: u32 = 4;
const ROW_BITS: u32 = 4;
const COLOUR_BITS: u32 = 2;

/// Width of one endpoint's band.
const ENDPOINT_BITS: u32 = COLUMN_BITS + ROW_BITS + COLOUR_BITS;

pub const END_COLUMN_SHIFT: u32 = 0;
pub const END_ROW_SHIFT: u32 = END_COLUMN_SHIFT + COLUMN_BITS;
pub const END_COLOUR_SHIFT: u32 = END_ROW_SHIFT + ROW_BITS;
pub const START_COLUMN_SHIFT: u32 = ENDPOINT_BITS;
pub const START_ROW_SHIFT: u32 = START_COLUMN_SHIFT + COLUMN_BITS;
pub const START_COLOUR_SHIFT: u32 = START_ROW_SHIFT + ROW_BITS;

/// Integer encoding of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveKey(pub u32);

impl MoveKey {
    /// Pack both endpoints into disjoint bands.
    #[inline]
    pub fn encode(mv: Move) -> MoveKey {
        MoveKey((endpoint_band(mv.start) << ENDPOINT_BITS) | endpoint_band(mv.end))
    }
}

impl From<Move> for MoveKey {
    fn from(mv: Move) -> Self {
        MoveKey::encode(mv)
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}

#[inline]
fn colour_tag(colour: Colour) -> u32 {
    colour.index() as u32 + 1
}

#[inline]
fn endpoint_band(pos: Position) -> u32 {
    (colour_tag(pos.colour()) << (END_COLOUR_SHIFT - END_COLUMN_SHIFT))
        | ((pos.row() as u32) << END_ROW_SHIFT)
        | pos.column() as u32
}
