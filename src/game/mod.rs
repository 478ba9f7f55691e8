//! Game controller: legal moves, history and game status.
//!
//! A [`Game`] owns one [`Position`] and a stack of full position snapshots.
//! Every move pushes a snapshot before mutating; undo pops it back. The same
//! push/test/pop sequence filters pseudo-legal moves, drives perft and the
//! search.
//!
//! # Example
//! ```
//! use mailbox_chess::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! game.move_uci("e2e4").unwrap();
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.undo());
//! ```

mod perft;
mod status;

use log::{debug, trace};

use crate::board::{Color, FenError, Move, MoveError, MoveList, Piece, Position, Square};

pub use perft::PerftStats;
pub use status::{DrawReason, GameStatus};

/// One game: current position plus undo history.
#[derive(Clone, Debug, Default)]
pub struct Game {
    position: Position,
    history: Vec<Position>,
    /// History length at which a threefold claim was accepted
    threefold_claim: Option<usize>,
}

impl Game {
    /// A game at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::new(),
            history: Vec::new(),
            threefold_claim: None,
        }
    }

    /// A game starting from position text.
    pub fn from_text(text: &str) -> Result<Self, FenError> {
        let mut game = Game::new();
        game.load(text)?;
        Ok(game)
    }

    /// Replace the position and clear the history.
    ///
    /// On error the game is left untouched.
    pub fn load(&mut self, text: &str) -> Result<(), FenError> {
        let position = Position::try_from_text(text)?;
        debug!("loaded position {}", text);
        self.position = position;
        self.history.clear();
        self.threefold_claim = None;
        Ok(())
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.position.to_text()
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Plies that can be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Snapshot the position, then play `mv` without any legality check.
    pub(crate) fn push(&mut self, mv: Move) {
        self.history.push(self.position.clone());
        self.position.play(mv);
    }

    /// Restore the last snapshot. False when the history is empty.
    pub(crate) fn pop(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.position = previous;
                if self
                    .threefold_claim
                    .is_some_and(|ply| ply > self.history.len())
                {
                    self.threefold_claim = None;
                }
                true
            }
            None => false,
        }
    }

    /// Play `mv` and report whether the mover's king is left safe, then undo it.
    fn keeps_king_safe(&mut self, mv: Move) -> bool {
        let mover = self.position.side_to_move();
        self.push(mv);
        let safe = !self.position.is_in_check(mover);
        self.pop();
        safe
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.position.pseudo_legal_moves();
        moves.retain(|&mv| self.keeps_king_safe(mv));
        moves
    }

    /// Legal moves of the piece on `from`; empty unless it belongs to the
    /// side to move.
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        if !self.position.piece_at(from).is_color(self.position.side_to_move()) {
            return MoveList::new();
        }
        let mut moves = self.position.moves_from(from);
        moves.retain(|&mv| self.keeps_king_safe(mv));
        moves
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check(self.position.side_to_move())
    }

    /// Play a move, which must be one of [`Game::legal_moves`].
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(&mv) {
            return Err(MoveError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        trace!("play {}", mv);
        self.push(mv);
        Ok(())
    }

    /// Resolve a from/to pair against the legal moves and play it.
    ///
    /// Without a promotion piece, a promoting pawn becomes a queen.
    pub fn move_squares(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        let wanted = promotion.unwrap_or(Piece::Queen);
        let mv = self
            .legal_moves_from(from)
            .into_iter()
            .find(|m| {
                m.to() == to
                    && match m.promotion() {
                        Some(piece) => piece == wanted,
                        None => promotion.is_none(),
                    }
            })
            .ok_or_else(|| MoveError::IllegalMove {
                notation: format!(
                    "{from}{to}{}",
                    promotion.map(|p| p.to_char().to_string()).unwrap_or_default()
                ),
            })?;
        trace!("play {}", mv);
        self.push(mv);
        Ok(mv)
    }

    /// Same as [`Game::move_squares`] with raw 0-63 indices.
    pub fn move_indices(&mut self, from: usize, to: usize) -> Result<Move, MoveError> {
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;
        self.move_squares(from, to, None)
    }

    /// Play a move in long algebraic form, e.g. `e2e4` or `e7e8n`.
    pub fn move_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveError::InvalidLength {
                len: text.chars().count(),
            });
        }
        let invalid_square = || MoveError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveError::InvalidPromotion { char: c }),
            },
        };
        self.move_squares(from, to, promotion)
    }

    /// Take back the last move. False when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.pop();
        if !undone {
            debug!("undo requested with empty history");
        }
        undone
    }
}
