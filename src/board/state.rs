use std::fmt;

use super::{CastleSide, CastlingRights, Color, Piece, PieceCode, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Full game state: mailbox board, per-color mirrors and the rule counters.
///
/// `board` is the single source of truth for occupancy. `by_color` holds the
/// same codes split by color (zero elsewhere) so a side's pieces can be
/// enumerated without scanning the opponent. Both are only ever written
/// through `set_piece`/`clear_square`, which keep them in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [PieceCode; 64],
    pub(crate) by_color: [[PieceCode; 64]; 2],
    pub(crate) side_to_move: Color,
    /// Plies since the last capture or pawn move
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    /// Cached king squares, indexed by color
    pub(crate) kings: [Square; 2],
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            position.put(file, 0, Color::White, *piece);
            position.put(file, 1, Color::White, Piece::Pawn);
            position.put(file, 6, Color::Black, Piece::Pawn);
            position.put(file, 7, Color::Black, *piece);
        }
        position.castling = CastlingRights::all();
        position
    }

    fn put(&mut self, file: u8, rank: u8, color: Color, piece: Piece) {
        if let Some(sq) = Square::new(file, rank) {
            self.set_piece(sq, PieceCode::new(color, piece));
        }
    }

    /// An empty board, white to move, kings cached on their home squares.
    ///
    /// Not a valid position until both kings are placed.
    pub(crate) fn empty() -> Self {
        Position {
            board: [PieceCode::EMPTY; 64],
            by_color: [[PieceCode::EMPTY; 64]; 2],
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [Square::E1, Square::E8],
            en_passant: None,
            castling: CastlingRights::none(),
        }
    }

    /// Place a piece, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, sq: Square, code: PieceCode) {
        self.clear_square(sq);
        let Some((color, piece)) = code.split() else {
            return;
        };
        self.board[sq.index()] = code;
        self.by_color[color.index()][sq.index()] = code;
        if piece == Piece::King {
            self.kings[color.index()] = sq;
        }
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.board[sq.index()] = PieceCode::EMPTY;
        self.by_color[0][sq.index()] = PieceCode::EMPTY;
        self.by_color[1][sq.index()] = PieceCode::EMPTY;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> PieceCode {
        self.board[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.index()].is_empty()
    }

    /// The whole mailbox, a1 first
    #[must_use]
    pub fn board(&self) -> &[PieceCode; 64] {
        &self.board
    }

    /// One color's mirror of the board
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> &[PieceCode; 64] {
        &self.by_color[color.index()]
    }

    /// Squares holding a piece of `color`, a1 first
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        self.by_color[color.index()]
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(idx, code)| (Square::from_index_unchecked(idx as u8), *code))
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub(crate) fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling.has(color, side)
    }

    /// Board and per-color arrays agree, and each color has exactly one
    /// king, sitting on its cached square.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for sq in Square::all() {
            let code = self.board[sq.index()];
            for color in Color::BOTH {
                let mirrored = self.by_color[color.index()][sq.index()];
                let expected = if code.is_color(color) {
                    code
                } else {
                    PieceCode::EMPTY
                };
                if mirrored != expected {
                    return false;
                }
            }
        }
        Color::BOTH.iter().all(|&color| {
            let king = PieceCode::new(color, Piece::King);
            let count = self.board.iter().filter(|&&code| code == king).count();
            count == 1 && self.board[self.kings[color.index()].index()] == king
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq).to_fen_char())
                    .unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_layout() {
        let position = Position::new();
        assert_eq!(
            position.piece_at(Square::E1),
            PieceCode::new(Color::White, Piece::King)
        );
        assert_eq!(
            position.piece_at(Square::D8),
            PieceCode::new(Color::Black, Piece::Queen)
        );
        assert_eq!(position.king_square(Color::White), Square::E1);
        assert_eq!(position.king_square(Color::Black), Square::E8);
        assert_eq!(position.squares_of(Color::White).count(), 16);
        assert_eq!(position.squares_of(Color::Black).count(), 16);
        assert!(position.is_consistent());
    }

    #[test]
    fn test_set_piece_replaces_opponent_mirror() {
        let mut position = Position::new();
        let e7: Square = "e7".parse().unwrap();
        position.set_piece(e7, PieceCode::new(Color::White, Piece::Queen));
        assert!(position.pieces_of(Color::Black)[e7.index()].is_empty());
        assert_eq!(
            position.pieces_of(Color::White)[e7.index()],
            PieceCode::new(Color::White, Piece::Queen)
        );
        assert!(position.is_consistent());
    }

    #[test]
    fn test_inconsistent_mirror_detected() {
        let mut position = Position::new();
        position.by_color[0][Square::A1.index()] = PieceCode::EMPTY;
        assert!(!position.is_consistent());
    }

    #[test]
    fn test_missing_king_detected() {
        let mut position = Position::new();
        position.clear_square(Square::E8);
        assert!(!position.is_consistent());
    }

    #[test]
    fn test_display_draws_ranks_top_down() {
        let text = Position::new().to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with('8'));
        assert!(first.contains("r n b q k b n r"));
    }
}
