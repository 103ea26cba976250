//! Core traits and types for three-player chess agents
//!
//! This crate provides the fundamental abstractions the search layer consumes:
//! - `Board`: Capability trait implemented by a concrete board engine
//! - `Colour`, `Position`, `Move`: Immutable value types
//! - `PieceKind`, `StepPattern`: Piece values and the movement catalog
//! - `MoveKey`: Dense integer encoding of a move for deduplication
//!
//! The crate never decides legality itself. Whatever implements [`Board`] owns
//! the rules, the clocks and the capture bookkeeping; the search layer only
//! asks questions and mutates clones it created.

pub mod board;
pub mod codec;
pub mod colour;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, ImpossiblePosition};
pub use codec::MoveKey;
pub use colour::Colour;
pub use piece::{Direction, Piece, PieceKind, StepPattern};
pub use position::{Move, Position, COLUMNS, ROWS};
