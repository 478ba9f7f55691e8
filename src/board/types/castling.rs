//! Castling rights and castle sides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    const fn on_back_rank(color: Color, file: u8) -> Square {
        Square::from_index_unchecked(color.back_rank() * 8 + file)
    }

    /// The king's home square
    #[must_use]
    pub const fn king_from(color: Color) -> Square {
        Self::on_back_rank(color, 4)
    }

    /// Where the king lands
    #[must_use]
    pub const fn king_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Self::on_back_rank(color, 6),
            CastleSide::QueenSide => Self::on_back_rank(color, 2),
        }
    }

    /// The rook's home corner
    #[must_use]
    pub const fn rook_from(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Self::on_back_rank(color, 7),
            CastleSide::QueenSide => Self::on_back_rank(color, 0),
        }
    }

    /// The square the king passes over, where the rook ends up
    #[must_use]
    pub const fn rook_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Self::on_back_rank(color, 5),
            CastleSide::QueenSide => Self::on_back_rank(color, 3),
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub(crate) fn empty_path(self, color: Color) -> impl Iterator<Item = Square> {
        let files: &'static [u8] = match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        };
        files.iter().map(move |&file| Self::on_back_rank(color, file))
    }

    /// Start, transit and destination of the king; none may be attacked.
    pub(crate) fn king_path(self, color: Color) -> [Square; 3] {
        [
            Self::king_from(color),
            self.rook_to(color),
            self.king_to(color),
        ]
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::KingSide);
        self.remove(color, CastleSide::QueenSide);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every right held by `self` is also held by `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CASTLE_WHITE_K,
            (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_Q,
        }
    }

    /// FEN letter for one right, in `KQkq` order
    pub(crate) const fn fen_char(color: Color, side: CastleSide) -> char {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 'K',
            (Color::White, CastleSide::QueenSide) => 'Q',
            (Color::Black, CastleSide::KingSide) => 'k',
            (Color::Black, CastleSide::QueenSide) => 'q',
        }
    }
}
