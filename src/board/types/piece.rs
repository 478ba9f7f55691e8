//! Piece, color and signed piece-code types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in code order (pawn = 1 .. king = 6)
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Magnitude used in the signed piece code (1-6).
    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        self.index() as i8 + 1
    }

    #[must_use]
    pub const fn from_code(code: i8) -> Option<Piece> {
        match code.unsigned_abs() {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a character, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_minor(self) -> bool {
        matches!(self, Piece::Knight | Piece::Bishop)
    }
}

/// Promotion choices, queen first.
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign carried by this color's piece codes (+1 white, -1 black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Square offset of one pawn step forward
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_step(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Content of one board cell as a signed code.
///
/// The sign is the color (positive white, negative black) and the
/// magnitude 1-6 the piece kind; zero is an empty square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceCode(i8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        PieceCode(color.sign() * piece.code())
    }

    /// Build from a raw signed code, rejecting magnitudes above 6.
    #[must_use]
    pub const fn from_raw(raw: i8) -> Option<Self> {
        if raw >= -6 && raw <= 6 {
            Some(PieceCode(raw))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.0 > 0 {
            Some(Color::White)
        } else if self.0 < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        Piece::from_code(self.0)
    }

    #[inline]
    #[must_use]
    pub fn split(self) -> Option<(Color, Piece)> {
        Some((self.color()?, self.piece()?))
    }

    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        match color {
            Color::White => self.0 > 0,
            Color::Black => self.0 < 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is(self, color: Color, piece: Piece) -> bool {
        self.0 == color.sign() * piece.code()
    }

    /// Same color, different kind (used for promotions)
    #[inline]
    #[must_use]
    pub(crate) const fn with_piece(self, piece: Piece) -> Self {
        if self.0 < 0 {
            PieceCode(-piece.code())
        } else {
            PieceCode(piece.code())
        }
    }

    /// FEN letter (uppercase for White), `None` when empty
    #[must_use]
    pub fn to_fen_char(self) -> Option<char> {
        let (color, piece) = self.split()?;
        let c = piece.to_char();
        Some(if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        })
    }

    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(PieceCode::new(color, piece))
    }
}

impl fmt::Debug for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fen_char() {
            Some(c) => write!(f, "PieceCode({c})"),
            None => write!(f, "PieceCode(empty)"),
        }
    }
}
