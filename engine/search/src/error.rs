//! Errors surfaced by the search layer.

use board_core::{Colour, ImpossiblePosition, Move};
use thiserror::Error;

/// Errors that can occur while choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The board refused a move the search had already checked as legal.
    #[error("board rejected {mv}: {source}")]
    MoveRejected {
        mv: Move,
        #[source]
        source: ImpossiblePosition,
    },

    #[error("no legal move for {colour}")]
    NoLegalMove { colour: Colour },

    #[error("game is already over")]
    GameOver,

    /// Final validation of a chosen move failed.
    #[error("chosen move {0} is not legal")]
    IllegalChoice(Move),
}

impl SearchError {
    pub(crate) fn rejected(mv: Move, source: ImpossiblePosition) -> Self {
        SearchError::MoveRejected { mv, source }
    }
}
