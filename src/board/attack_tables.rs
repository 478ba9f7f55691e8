//! Precomputed ray geometry for the mailbox generators.
//!
//! Every direction gets a per-square step bound: the number of squares to the
//! board edge, derived from file and rank. Ray casting never relies on index
//! wraparound to detect the edge.

use once_cell::sync::Lazy;

use super::Square;

/// One of the eight compass directions on the mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub(crate) const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub(crate) const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub(crate) const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Index delta of one step
    #[inline]
    pub(crate) const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => 9,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::SouthWest => -9,
        }
    }
}

/// Steps to the edge, indexed by square then direction.
static STEP_BOUNDS: Lazy<[[u8; 8]; 64]> = Lazy::new(|| {
    let mut bounds = [[0u8; 8]; 64];
    for (idx, slot) in bounds.iter_mut().enumerate() {
        let file = (idx % 8) as u8;
        let rank = (idx / 8) as u8;
        let north = 7 - rank;
        let south = rank;
        let east = 7 - file;
        let west = file;
        for dir in Direction::ALL {
            slot[dir.index()] = match dir {
                Direction::North => north,
                Direction::South => south,
                Direction::East => east,
                Direction::West => west,
                Direction::NorthEast => north.min(east),
                Direction::NorthWest => north.min(west),
                Direction::SouthEast => south.min(east),
                Direction::SouthWest => south.min(west),
            };
        }
    }
    bounds
});

#[inline]
pub(crate) fn steps_to_edge(sq: Square, dir: Direction) -> u8 {
    STEP_BOUNDS[sq.index()][dir.index()]
}

/// Knight jumps as (index delta, file delta).
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (17, 1),
    (15, -1),
    (10, 2),
    (6, -2),
    (-6, 2),
    (-10, -2),
    (-15, 1),
    (-17, -1),
];

/// Landing square of a knight jump, rejecting jumps that wrap across files.
#[inline]
pub(crate) fn knight_target(from: Square, jump: (i8, i8)) -> Option<Square> {
    let (delta, file_delta) = jump;
    let to = from.offset(delta)?;
    let file_distance = i16::from(to.file()) - i16::from(from.file());
    (file_distance == i16::from(file_delta)).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_bounds() {
        assert_eq!(steps_to_edge(Square::A1, Direction::North), 7);
        assert_eq!(steps_to_edge(Square::A1, Direction::West), 0);
        assert_eq!(steps_to_edge(Square::A1, Direction::NorthEast), 7);
        assert_eq!(steps_to_edge(Square::A1, Direction::SouthEast), 0);
        assert_eq!(steps_to_edge(Square::H8, Direction::SouthWest), 7);
        assert_eq!(steps_to_edge(Square::H8, Direction::East), 0);
    }

    #[test]
    fn test_center_bounds() {
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(steps_to_edge(d4, Direction::North), 4);
        assert_eq!(steps_to_edge(d4, Direction::South), 3);
        assert_eq!(steps_to_edge(d4, Direction::East), 4);
        assert_eq!(steps_to_edge(d4, Direction::West), 3);
        assert_eq!(steps_to_edge(d4, Direction::NorthWest), 3);
        assert_eq!(steps_to_edge(d4, Direction::SouthEast), 3);
    }

    #[test]
    fn test_knight_does_not_wrap() {
        let h1 = Square::H1;
        let targets: Vec<Square> = KNIGHT_JUMPS
            .iter()
            .filter_map(|&jump| knight_target(h1, jump))
            .collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&"g3".parse().unwrap()));
        assert!(targets.contains(&"f2".parse().unwrap()));

        let a8 = Square::A8;
        let count = KNIGHT_JUMPS
            .iter()
            .filter_map(|&jump| knight_target(a8, jump))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_knight_center_has_eight_targets() {
        let e4: Square = "e4".parse().unwrap();
        let count = KNIGHT_JUMPS
            .iter()
            .filter_map(|&jump| knight_target(e4, jump))
            .count();
        assert_eq!(count, 8);
    }
}
