//! Position model and move rules on a mailbox board.
//!
//! A [`Position`] is a 64-cell array of signed piece codes plus per-color
//! mirrors and the rule counters. Generators produce pseudo-legal moves per
//! piece, the attack detector answers "is this square attacked", and the
//! executor applies moves as one composite update.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, Position};
//!
//! let position = Position::new();
//! let moves = position.pseudo_legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert!(!position.is_in_check(Color::White));
//! ```

mod attack_tables;
mod attacks;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use state::Position;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, Piece, PieceCode, ScoredMove,
    ScoredMoveList, Square,
};

pub(crate) use types::PROMOTION_PIECES;
