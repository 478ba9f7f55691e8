//! Terminal-state detection: mate, stalemate and the draw rules.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::debug;

use super::Game;
use crate::board::{Color, Piece, Position, Square};

/// Plies without capture or pawn move that end the game
const FIFTY_MOVE_PLIES: u32 = 100;

/// Look-back offsets compared for a threefold repetition
const THREEFOLD_OFFSETS: [usize; 2] = [4, 8];
const THREEFOLD_MIN_HISTORY: usize = 10;

/// Look-back offsets compared for a fivefold repetition
const FIVEFOLD_OFFSETS: [usize; 4] = [4, 8, 12, 16];
const FIVEFOLD_MIN_HISTORY: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
    /// Only reported after a successful claim
    ThreefoldRepetition,
    FivefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

impl Position {
    /// Neither side can ever mate: K v K, K+minor v K, or K+B v K+B with
    /// both bishops on the same square color.
    #[must_use]
    pub fn has_insufficient_material(&self) -> bool {
        let others: Vec<(Color, Piece, Square)> = Color::BOTH
            .iter()
            .flat_map(|&color| self.squares_of(color))
            .filter_map(|(sq, code)| {
                let (color, piece) = code.split()?;
                (piece != Piece::King).then_some((color, piece, sq))
            })
            .collect();

        match others.as_slice() {
            [] => true,
            [(_, piece, _)] => piece.is_minor(),
            [(c1, Piece::Bishop, s1), (c2, Piece::Bishop, s2)] => {
                c1 != c2 && s1.is_dark() == s2.is_dark()
            }
            _ => false,
        }
    }

    /// Same placement of every piece. The even look-back offsets already
    /// fix the side to move; castling rights and en passant target are not
    /// compared.
    fn repeats(&self, other: &Position) -> bool {
        self.board == other.board
    }
}

impl Game {
    fn matches_all(&self, offsets: &[usize]) -> bool {
        offsets.iter().all(|&back| {
            self.history
                .len()
                .checked_sub(back)
                .and_then(|idx| self.history.get(idx))
                .is_some_and(|past| self.position.repeats(past))
        })
    }

    /// Current position equals the ones 4 and 8 plies back, with at least
    /// ten plies of history.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.history.len() >= THREEFOLD_MIN_HISTORY && self.matches_all(&THREEFOLD_OFFSETS)
    }

    /// Current position equals the ones 4, 8, 12 and 16 plies back, with at
    /// least eighteen plies of history.
    #[must_use]
    pub fn is_fivefold_repetition(&self) -> bool {
        self.history.len() >= FIVEFOLD_MIN_HISTORY && self.matches_all(&FIVEFOLD_OFFSETS)
    }

    /// Claim a threefold repetition draw for the current position.
    ///
    /// Returns whether the claim was valid. An accepted claim makes
    /// [`Game::status`] report the draw until the move is taken back.
    pub fn claim_threefold(&mut self) -> bool {
        if self.is_threefold_repetition() {
            debug!("threefold repetition claimed at ply {}", self.history.len());
            self.threefold_claim = Some(self.history.len());
            true
        } else {
            false
        }
    }

    fn threefold_claimed(&self) -> bool {
        self.threefold_claim == Some(self.history.len())
    }

    /// Status of the game at the current position.
    pub fn status(&mut self) -> GameStatus {
        if self.legal_moves().is_empty() {
            return if self.is_in_check() {
                GameStatus::Checkmate {
                    winner: self.position.side_to_move().opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.position.halfmove_clock() >= FIFTY_MOVE_PLIES {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        if self.position.has_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.is_fivefold_repetition() {
            return GameStatus::Draw(DrawReason::FivefoldRepetition);
        }
        if self.threefold_claimed() {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        GameStatus::Playing
    }
}
