use super::super::attack_tables::Direction;
use super::super::{Color, Move, MoveList, PieceCode, Position, Square, PROMOTION_PIECES};
use super::sliders::ray;

/// The two forward diagonals of a pawn
fn capture_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dirs = match color {
        Color::White => [Direction::NorthEast, Direction::NorthWest],
        Color::Black => [Direction::SouthEast, Direction::SouthWest],
    };
    dirs.into_iter().flat_map(move |dir| ray(from, dir, 1))
}

/// Rank of an en passant target this color may capture onto
const fn en_passant_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 2,
    }
}

fn push_pawn_move(moves: &mut MoveList, code: PieceCode, color: Color, from: Square, to: Square) {
    if to.rank() == color.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promotion_to(code, from, to, promo));
        }
    } else {
        moves.push(Move::new(code, from, to));
    }
}

impl Position {
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        code: PieceCode,
        color: Color,
        moves: &mut MoveList,
    ) {
        let step = color.pawn_step();
        if let Some(one) = from.offset(step).filter(|&sq| self.is_empty(sq)) {
            push_pawn_move(moves, code, color, from, one);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(step).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(code, from, two));
                }
            }
        }

        for to in capture_squares(from, color) {
            let occupant = self.piece_at(to);
            let is_capture = occupant.is_color(color.opponent());
            let is_en_passant = self.en_passant == Some(to) && to.rank() == en_passant_rank(color);
            if is_capture || is_en_passant {
                push_pawn_move(moves, code, color, from, to);
            }
        }
    }

    /// Diagonal attacks regardless of what occupies the squares.
    pub(crate) fn pawn_attacks(
        &self,
        from: Square,
        code: PieceCode,
        color: Color,
        target: Option<Square>,
        moves: &mut MoveList,
    ) {
        for to in capture_squares(from, color) {
            if target.map_or(true, |t| t == to) {
                moves.push(Move::new(code, from, to));
            }
        }
    }

    pub(crate) fn pawn_reaches(from: Square, color: Color, target: Square) -> bool {
        capture_squares(from, color).any(|to| to == target)
    }
}
