use super::{CastleSide, Color, Move, Piece, Position, Square};

impl Position {
    /// Whether `mv` takes something, en passant included.
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        !self.is_empty(mv.to()) || self.en_passant_victim(mv).is_some()
    }

    /// Square of the pawn removed by an en passant capture, if `mv` is one.
    pub(crate) fn en_passant_victim(&self, mv: Move) -> Option<Square> {
        let (color, piece) = mv.piece().split()?;
        if piece != Piece::Pawn || self.en_passant != Some(mv.to()) {
            return None;
        }
        mv.to().offset(-color.pawn_step())
    }

    /// Board part of a move.
    ///
    /// Clears the origin, sets the destination to the moved or promoted
    /// piece, removes an en passant victim behind the destination and
    /// relocates the rook of a castling move. The per-color arrays and the
    /// king cache follow through `set_piece`.
    pub(crate) fn apply(&mut self, mv: Move) {
        let Some(color) = mv.piece().color() else {
            return;
        };
        if let Some(victim) = self.en_passant_victim(mv) {
            self.clear_square(victim);
        }
        self.clear_square(mv.from());
        self.set_piece(mv.to(), mv.landing_piece());

        if let Some(side) = mv.castling() {
            let rook_from = side.rook_from(color);
            let rook = self.piece_at(rook_from);
            self.clear_square(rook_from);
            self.set_piece(side.rook_to(color), rook);
        }
    }

    /// Drop rights lost by this move: any king move, and any move from or
    /// onto a rook's home corner.
    pub(crate) fn update_castling(&mut self, mv: Move) {
        if let Some((color, Piece::King)) = mv.piece().split() {
            self.castling.remove_color(color);
        }
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                let corner = side.rook_from(color);
                if mv.from() == corner || mv.to() == corner {
                    self.castling.remove(color, side);
                }
            }
        }
    }

    /// Set the target behind a double pawn step, clear it otherwise.
    pub(crate) fn update_en_passant(&mut self, mv: Move) {
        self.en_passant = match mv.piece().split() {
            Some((color, Piece::Pawn))
                if mv.from().index().abs_diff(mv.to().index()) == 16 =>
            {
                mv.from().offset(color.pawn_step())
            }
            _ => None,
        };
    }

    /// Half-move clock and full-move number. Must run before `apply`, which
    /// destroys the capture information.
    pub(crate) fn update_clocks(&mut self, mv: Move) {
        let pawn_move = matches!(mv.piece().piece(), Some(Piece::Pawn));
        if pawn_move || self.is_capture(mv) {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// The full move sequence: clocks, castling rights, board, en passant
    /// target, then the turn passes.
    ///
    /// Performs no legality check.
    pub(crate) fn play(&mut self, mv: Move) {
        self.update_clocks(mv);
        self.update_castling(mv);
        self.apply(mv);
        self.update_en_passant(mv);
        self.side_to_move = self.side_to_move.opponent();
        debug_assert!(self.is_consistent(), "position corrupted by {mv:?}");
    }
}
