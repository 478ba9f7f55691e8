//! Move types and move lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Piece, PieceCode};
use super::square::Square;

/// A move as produced by the generators.
///
/// Carries the moving piece's code so the executor and the evaluation never
/// have to look it up again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    piece: PieceCode,
    from: Square,
    to: Square,
    castling: Option<CastleSide>,
    promotion: Option<Piece>,
}

impl Move {
    /// A plain move or capture
    #[inline]
    #[must_use]
    pub const fn new(piece: PieceCode, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            castling: None,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion_to(piece: PieceCode, from: Square, to: Square, promo: Piece) -> Self {
        Move {
            piece,
            from,
            to,
            castling: None,
            promotion: Some(promo),
        }
    }

    /// A king move tagged with the castle side; the rook follows on apply.
    #[inline]
    #[must_use]
    pub const fn castle(piece: PieceCode, from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            piece,
            from,
            to,
            castling: Some(side),
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> PieceCode {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn castling(self) -> Option<CastleSide> {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castling.is_some()
    }

    /// Piece code standing on the destination after the move
    #[inline]
    #[must_use]
    pub(crate) const fn landing_piece(self) -> PieceCode {
        match self.promotion {
            Some(promo) => self.piece.with_piece(promo),
            None => self.piece,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        match self.castling {
            Some(CastleSide::KingSide) => write!(f, " O-O")?,
            Some(CastleSide::QueenSide) => write!(f, " O-O-O")?,
            None => {}
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Growable list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

/// A move paired with its ordering score.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// List of scored moves for move ordering.
#[derive(Clone, Debug, Default)]
pub struct ScoredMoveList {
    moves: Vec<ScoredMove>,
}

impl ScoredMoveList {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ScoredMoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves.push(ScoredMove { mv, score });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves
    }

    /// Sort by score, highest first. Stable, so generator order breaks ties.
    pub fn sort_by_score_desc(&mut self) {
        self.moves.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Sort by score, lowest first. Stable.
    pub fn sort_by_score_asc(&mut self) {
        self.moves.sort_by(|a, b| a.score.cmp(&b.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.moves.iter()
    }
}
