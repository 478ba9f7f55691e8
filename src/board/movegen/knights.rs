use super::super::attack_tables::{knight_target, KNIGHT_JUMPS};
use super::super::{Color, Move, MoveList, PieceCode, Position, Square};

fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(move |&jump| knight_target(from, jump))
}

impl Position {
    pub(crate) fn knight_moves(
        &self,
        from: Square,
        code: PieceCode,
        color: Color,
        moves: &mut MoveList,
    ) {
        for to in knight_targets(from) {
            if !self.piece_at(to).is_color(color) {
                moves.push(Move::new(code, from, to));
            }
        }
    }

    pub(crate) fn knight_attacks(
        from: Square,
        code: PieceCode,
        target: Option<Square>,
        moves: &mut MoveList,
    ) {
        for to in knight_targets(from) {
            if target.map_or(true, |t| t == to) {
                moves.push(Move::new(code, from, to));
            }
        }
    }

    pub(crate) fn knight_reaches(from: Square, target: Square) -> bool {
        knight_targets(from).any(|to| to == target)
    }
}
