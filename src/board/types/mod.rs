//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `Color` and the signed `PieceCode` stored in board cells
//! - `Square` - mailbox index 0-63
//! - `Move`, `MoveList` and `ScoredMoveList`
//! - `CastlingRights` and `CastleSide`

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece, PieceCode};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
