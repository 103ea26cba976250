//! The board capability interface consumed by the search layer.
//!
//! Implementations own legality, piece stepping, capture bookkeeping, clocks
//! and game-over detection. The search layer treats a board purely through
//! this trait and only mutates clones it created itself.

use thiserror::Error;

use crate::colour::Colour;
use crate::piece::{Direction, Piece, PieceKind, StepPattern};
use crate::position::{Move, Position};

/// The board refused a step or a move.
///
/// During direction walking this is the ordinary "walked off the board"
/// signal. During move application it means the caller and the board
/// disagree about legality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImpossiblePosition {
    #[error("step {direction:?} from {from} leaves the board")]
    OffBoard { from: Position, direction: Direction },

    #[error("coordinates out of range: row {row}, column {column}")]
    OutOfRange { row: u8, column: u8 },

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("game is already over")]
    GameOver,

    #[error("cannot parse position '{0}'")]
    Unparseable(String),
}

/// Main trait for board engines
///
/// `Clone` must produce a deep, independent copy: mutating a clone never
/// affects the original. `Send + Sync` lets rollouts run on worker threads,
/// each on its own clone.
pub trait Board: Clone + Send + Sync {
    /// Player to move.
    fn turn(&self) -> Colour;

    /// Squares currently occupied by the given player's pieces.
    fn positions(&self, colour: Colour) -> Vec<Position>;

    /// Piece standing on a square, if any.
    fn piece_at(&self, position: Position) -> Option<Piece>;

    /// Direction sequences and repetition counts a piece kind may use.
    fn movement_patterns(&self, kind: PieceKind) -> &'static [StepPattern] {
        kind.patterns()
    }

    /// Walk one repetition of `directions` for `piece`, starting at `from`.
    ///
    /// `reverse` is set when the walk this repetition belongs to has already
    /// crossed into another region, which flips every direction. Crossings
    /// inside a single repetition are the board's own business.
    ///
    /// Fails with [`ImpossiblePosition`] when the walk leaves the board. Does
    /// not check occupancy or legality.
    fn step(
        &self,
        piece: Piece,
        directions: &[Direction],
        from: Position,
        reverse: bool,
    ) -> Result<Position, ImpossiblePosition>;

    /// Repeat `directions` `reps` times from `start`.
    fn walk(
        &self,
        piece: Piece,
        directions: &[Direction],
        start: Position,
        reps: u8,
    ) -> Result<Position, ImpossiblePosition> {
        let mut end = start;
        for _ in 0..reps {
            end = self.step(piece, directions, end, start.colour() != end.colour())?;
        }
        Ok(end)
    }

    /// Whether the player to move may play `mv` right now.
    fn is_legal_move(&self, mv: Move) -> bool;

    /// Play `mv` for the player to move, charging `elapsed_ms` to their clock.
    fn apply_move(&mut self, mv: Move, elapsed_ms: u64) -> Result<(), ImpossiblePosition>;

    /// Pieces the given player has captured so far, in capture order.
    fn captured(&self, colour: Colour) -> &[Piece];

    fn is_game_over(&self) -> bool;

    /// Winner of a finished game.
    fn winner(&self) -> Option<Colour>;

    /// Loser of a finished game.
    fn loser(&self) -> Option<Colour>;

    /// Milliseconds left on a player's clock. Negative once exhausted.
    fn time_left_ms(&self, colour: Colour) -> i64;
}
