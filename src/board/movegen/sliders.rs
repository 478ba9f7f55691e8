use super::super::attack_tables::{steps_to_edge, Direction};
use super::super::{Color, Move, MoveList, Piece, PieceCode, Position, Square};

/// Longest possible slide on an 8x8 board
pub(crate) const FULL_RAY: u8 = 7;

const DIAGONALS: &[Direction] = &Direction::DIAGONAL;
const ORTHOGONALS: &[Direction] = &Direction::ORTHOGONAL;
const EVERY_DIRECTION: &[Direction] = &Direction::ALL;

/// Directions and step limit for the pieces that move along rays.
///
/// The king shares the routine with a limit of one step.
pub(crate) fn ray_pattern(piece: Piece) -> Option<(&'static [Direction], u8)> {
    match piece {
        Piece::Bishop => Some((DIAGONALS, FULL_RAY)),
        Piece::Rook => Some((ORTHOGONALS, FULL_RAY)),
        Piece::Queen => Some((EVERY_DIRECTION, FULL_RAY)),
        Piece::King => Some((EVERY_DIRECTION, 1)),
        Piece::Pawn | Piece::Knight => None,
    }
}

/// Squares along `dir` from `from`, nearest first, up to `limit` steps or the edge.
pub(crate) fn ray(from: Square, dir: Direction, limit: u8) -> impl Iterator<Item = Square> {
    let steps = steps_to_edge(from, dir).min(limit);
    let base = from.index() as i16;
    let offset = i16::from(dir.offset());
    (1..=i16::from(steps)).map(move |n| Square::from_index_unchecked((base + offset * n) as u8))
}

impl Position {
    /// Ray moves: empty squares plus the first blocker when it is an enemy.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        code: PieceCode,
        color: Color,
        dirs: &[Direction],
        limit: u8,
        moves: &mut MoveList,
    ) {
        for &dir in dirs {
            for to in ray(from, dir, limit) {
                let occupant = self.piece_at(to);
                if !occupant.is_color(color) {
                    moves.push(Move::new(code, from, to));
                }
                if !occupant.is_empty() {
                    break;
                }
            }
        }
    }

    /// Ray attacks: every square up to and including the first blocker of
    /// either color, optionally narrowed to `target`.
    pub(crate) fn slider_attacks(
        &self,
        from: Square,
        code: PieceCode,
        dirs: &[Direction],
        limit: u8,
        target: Option<Square>,
        moves: &mut MoveList,
    ) {
        for &dir in dirs {
            for to in ray(from, dir, limit) {
                if target.map_or(true, |t| t == to) {
                    moves.push(Move::new(code, from, to));
                }
                if !self.is_empty(to) {
                    break;
                }
            }
        }
    }

    pub(crate) fn slider_reaches(
        &self,
        from: Square,
        dirs: &[Direction],
        limit: u8,
        target: Square,
    ) -> bool {
        dirs.iter().any(|&dir| {
            for to in ray(from, dir, limit) {
                if to == target {
                    return true;
                }
                if !self.is_empty(to) {
                    return false;
                }
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let squares: Vec<Square> = ray(sq("f6"), Direction::NorthEast, FULL_RAY).collect();
        assert_eq!(squares, vec![sq("g7"), sq("h8")]);
        assert_eq!(ray(Square::H1, Direction::East, FULL_RAY).count(), 0);
        assert_eq!(ray(Square::A1, Direction::North, 1).count(), 1);
    }

    #[test]
    fn test_rook_blocked_by_own_and_enemy() {
        let position: Position = "4k3/8/8/8/R2p4/8/P7/4K3 w - - 0 1".parse().unwrap();
        let moves = position.moves_from(sq("a4"));
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        // north to a8 (4), south to a3 (1), east to the d4 capture (3)
        assert_eq!(moves.len(), 8);
        assert!(targets.contains(&sq("d4")));
        assert!(!targets.contains(&sq("e4")));
        assert!(!targets.contains(&sq("a2")));
    }

    #[test]
    fn test_attacks_include_defended_piece() {
        let position: Position = "4k3/8/8/8/R2p4/8/P7/4K3 w - - 0 1".parse().unwrap();
        assert!(position.attacks_square(sq("a4"), sq("a2")));
        assert!(position.attacks_square(sq("a4"), sq("d4")));
        assert!(!position.attacks_square(sq("a4"), sq("e4")));
        let narrowed = position.attacks_from(sq("a4"), Some(sq("a2")));
        assert_eq!(narrowed.len(), 1);
    }

    #[test]
    fn test_queen_in_open_center() {
        let position: Position = "4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(position.moves_from(sq("d4")).len(), 27);
    }
}
