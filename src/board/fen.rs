use std::str::FromStr;

use super::error::FenError;
use super::{CastleSide, CastlingRights, Color, Piece, PieceCode, Position, Square};

impl Position {
    /// Parse a position from its six-field text form (FEN).
    ///
    /// Validation is complete before anything is returned: an error never
    /// leaves a partially built position behind.
    pub fn try_from_text(text: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        position.castling = parse_castling(parts[2])?;
        position.en_passant = parse_en_passant(parts[3], position.side_to_move)?;
        position.halfmove_clock = parse_counter(parts[4], "half-move clock")?;
        position.fullmove_number = parse_counter(parts[5], "full-move number")?;

        Ok(position)
    }

    /// Serialize to the six-field text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                let c = Square::new(file, rank).and_then(|sq| self.piece_at(sq).to_fen_char());
                match c {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling.has(color, side) {
                    castling.push(CastlingRights::fen_char(color, side));
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(position: &mut Position, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut king_counts = [0usize; 2];
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file = 0usize;
        let mut last_was_digit = false;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                if last_was_digit {
                    return Err(FenError::ConsecutiveDigits { rank: rank_idx });
                }
                last_was_digit = true;
                file += run as usize;
                continue;
            }
            last_was_digit = false;
            let code = PieceCode::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let sq = Square::new(file as u8, rank).ok_or(FenError::BadRankLength {
                rank: rank_idx,
                files: file + 1,
            })?;
            if let Some((color, Piece::King)) = code.split() {
                king_counts[color.index()] += 1;
            }
            position.set_piece(sq, code);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank_idx,
                files: file,
            });
        }
    }

    for color in Color::BOTH {
        match king_counts[color.index()] {
            0 => return Err(FenError::MissingKing { color }),
            1 => {}
            _ => return Err(FenError::DuplicateKing { color }),
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(invalid()),
        };
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.set(color, side);
    }
    Ok(rights)
}

/// The target lies behind a pawn the opponent just pushed: rank 6 when
/// White is to move, rank 3 when Black is.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let target_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    match field.parse::<Square>() {
        Ok(sq) if sq.rank() == target_rank => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    };
    // u32::from_str also takes a leading '+'
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_text(s)
    }
}
