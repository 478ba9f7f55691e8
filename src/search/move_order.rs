use super::tables::placed_value;
use crate::board::{Move, MoveList, Position, ScoredMoveList};

/// Evaluation change caused by `mv`, from the searching side's view.
///
/// The mover gains the value of what lands on `to` (the promotion piece when
/// promoting), loses the value it had on `from`, and gains the value of any
/// captured piece on its capture square. The sum is negated when the
/// opponent of the searching side moves.
pub(crate) fn move_delta(position: &Position, mv: Move, ai_side: bool) -> i32 {
    let Some((color, piece)) = mv.piece().split() else {
        return 0;
    };
    let landing = mv.promotion().unwrap_or(piece);
    let mut delta = placed_value(color, landing, mv.to()) - placed_value(color, piece, mv.from());

    let capture_sq = position.en_passant_victim(mv).unwrap_or(mv.to());
    if let Some((victim_color, victim)) = position.piece_at(capture_sq).split() {
        delta += placed_value(victim_color, victim, capture_sq);
    }

    if ai_side {
        delta
    } else {
        -delta
    }
}

/// Pair each move with its delta and sort best-first for the side to move:
/// descending when maximizing, ascending when minimizing.
pub(crate) fn order_moves(position: &Position, moves: MoveList, ai_side: bool) -> ScoredMoveList {
    let mut scored = ScoredMoveList::with_capacity(moves.len());
    for mv in moves {
        scored.push(mv, move_delta(position, mv, ai_side));
    }
    if ai_side {
        scored.sort_by_score_desc();
    } else {
        scored.sort_by_score_asc();
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, PieceCode, Square};
    use crate::search::tables::{square_bonus, weight};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_quiet_move_delta_is_positional_only() {
        let position = Position::new();
        let mv = Move::new(PieceCode::new(Color::White, Piece::Pawn), sq("e2"), sq("e4"));
        let expected = square_bonus(Color::White, Piece::Pawn, sq("e4"))
            - square_bonus(Color::White, Piece::Pawn, sq("e2"));
        assert_eq!(move_delta(&position, mv, true), expected);
        assert_eq!(move_delta(&position, mv, false), -expected);
    }

    #[test]
    fn test_capture_adds_victim_value() {
        let position: Position = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::new(PieceCode::new(Color::White, Piece::Pawn), sq("e4"), sq("d5"));
        let delta = move_delta(&position, mv, true);
        assert!(delta > weight(Piece::Queen) - 100);
    }

    #[test]
    fn test_en_passant_counts_captured_pawn() {
        let position: Position = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let mv = Move::new(PieceCode::new(Color::White, Piece::Pawn), sq("e5"), sq("d6"));
        let expected = square_bonus(Color::White, Piece::Pawn, sq("d6"))
            - square_bonus(Color::White, Piece::Pawn, sq("e5"))
            + weight(Piece::Pawn)
            + square_bonus(Color::Black, Piece::Pawn, sq("d5"));
        assert_eq!(move_delta(&position, mv, true), expected);
    }

    #[test]
    fn test_promotion_gains_material() {
        let position: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::promotion_to(
            PieceCode::new(Color::White, Piece::Pawn),
            sq("a7"),
            sq("a8"),
            Piece::Queen,
        );
        assert!(move_delta(&position, mv, true) > weight(Piece::Queen) - weight(Piece::Pawn) - 100);
    }

    #[test]
    fn test_order_direction_follows_side() {
        let position: Position = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = position.pseudo_legal_moves();
        let best_first = order_moves(&position, moves.clone(), true);
        assert_eq!(best_first.as_slice()[0].mv.to(), sq("d5"));
        let worst_first = order_moves(&position, moves, false);
        assert_eq!(worst_first.as_slice()[0].mv.to(), sq("d5"));
        assert!(worst_first.as_slice()[0].score < 0);
    }
}
