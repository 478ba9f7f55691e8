use super::super::attack_tables::Direction;
use super::super::{CastleSide, Color, Move, MoveList, Piece, PieceCode, Position, Square};

impl Position {
    pub(crate) fn king_moves(
        &self,
        from: Square,
        code: PieceCode,
        color: Color,
        moves: &mut MoveList,
    ) {
        self.slider_moves(from, code, color, &Direction::ALL, 1, moves);

        if from != CastleSide::king_from(color) {
            return;
        }
        for side in CastleSide::BOTH {
            if self.can_castle(color, side) {
                moves.push(Move::castle(code, from, side.king_to(color), side));
            }
        }
    }

    /// Right held, rook at home, path clear and no king square attacked.
    fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.has_castling_right(color, side) {
            return false;
        }
        if !self.piece_at(side.rook_from(color)).is(color, Piece::Rook) {
            return false;
        }
        if !side.empty_path(color).all(|sq| self.is_empty(sq)) {
            return false;
        }
        let enemy = color.opponent();
        side.king_path(color)
            .iter()
            .all(|&sq| !self.is_attacking(enemy, sq))
    }
}
