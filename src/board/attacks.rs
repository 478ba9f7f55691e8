use super::{Color, Position, Square};

impl Position {
    /// Whether any piece of `color` attacks `square`.
    ///
    /// Stops at the first attacker found.
    #[must_use]
    pub fn is_attacking(&self, color: Color, square: Square) -> bool {
        self.squares_of(color)
            .any(|(from, _)| self.attacks_square(from, square))
    }

    /// Whether `color`'s king is attacked by the opponent.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_attacking(color.opponent(), self.king_square(color))
    }
}
