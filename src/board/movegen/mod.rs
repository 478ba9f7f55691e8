//! Pseudo-legal move generation on the mailbox.
//!
//! Each piece family has a "moves" form used to enumerate candidate moves and
//! an "attacks" form used by the attack detector. The attacks form ignores
//! whose turn it is, includes squares holding friendly pieces, and never
//! produces castling or pawn pushes.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{MoveList, Piece, Position, Square};
use sliders::ray_pattern;

impl Position {
    /// Pseudo-legal moves of the piece on `from`, for that piece's color.
    ///
    /// Empty when the square is empty. Moves may still leave the mover's own
    /// king attacked.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.push_moves_from(from, &mut moves);
        moves
    }

    fn push_moves_from(&self, from: Square, moves: &mut MoveList) {
        let code = self.piece_at(from);
        let Some((color, piece)) = code.split() else {
            return;
        };
        match piece {
            Piece::Pawn => self.pawn_moves(from, code, color, moves),
            Piece::Knight => self.knight_moves(from, code, color, moves),
            Piece::King => self.king_moves(from, code, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                if let Some((dirs, limit)) = ray_pattern(piece) {
                    self.slider_moves(from, code, color, dirs, limit, moves);
                }
            }
        }
    }

    /// Squares attacked by the piece on `from`, as moves.
    ///
    /// With a `target`, only a move onto that square is reported (at most one).
    #[must_use]
    pub fn attacks_from(&self, from: Square, target: Option<Square>) -> MoveList {
        let mut moves = MoveList::new();
        let code = self.piece_at(from);
        let Some((color, piece)) = code.split() else {
            return moves;
        };
        match piece {
            Piece::Pawn => self.pawn_attacks(from, code, color, target, &mut moves),
            Piece::Knight => Self::knight_attacks(from, code, target, &mut moves),
            _ => {
                if let Some((dirs, limit)) = ray_pattern(piece) {
                    self.slider_attacks(from, code, dirs, limit, target, &mut moves);
                }
            }
        }
        moves
    }

    /// Whether the piece on `from` attacks `target`, without allocating.
    #[must_use]
    pub fn attacks_square(&self, from: Square, target: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from).split() else {
            return false;
        };
        match piece {
            Piece::Pawn => Self::pawn_reaches(from, color, target),
            Piece::Knight => Self::knight_reaches(from, target),
            _ => ray_pattern(piece)
                .map_or(false, |(dirs, limit)| self.slider_reaches(from, dirs, limit, target)),
        }
    }

    /// Pseudo-legal moves for every piece of the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.squares_of(self.side_to_move) {
            self.push_moves_from(from, &mut moves);
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_pseudo_legal_count() {
        assert_eq!(Position::new().pseudo_legal_moves().len(), 20);
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let position = Position::new();
        let e4: Square = "e4".parse().unwrap();
        assert!(position.moves_from(e4).is_empty());
        assert!(position.attacks_from(e4, None).is_empty());
        assert!(!position.attacks_square(e4, Square::E8));
    }

    #[test]
    fn test_moves_from_uses_piece_color() {
        // black knight generates even with white to move
        let position = Position::new();
        assert_eq!(position.moves_from(Square::B8).len(), 2);
    }

    #[test]
    fn test_kiwipete_pseudo_legal_count() {
        let position: Position =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
                .parse()
                .unwrap();
        // 48 legal moves; pseudo-legal can only add to that
        assert!(position.pseudo_legal_moves().len() >= 48);
    }
}
