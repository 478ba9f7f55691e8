use std::ops::AddAssign;

use super::Game;
use crate::board::Move;

/// Leaf counters from a perft run.
///
/// Every field except `nodes` counts moves made at the last ply only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerftStats {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl AddAssign for PerftStats {
    fn add_assign(&mut self, other: PerftStats) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passant += other.en_passant;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
    }
}

impl Game {
    /// Count leaf positions `depth` plies below the current one.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.push(mv);
            nodes += self.perft(depth - 1);
            self.pop();
        }
        nodes
    }

    /// Perft with a breakdown of the moves played at the last ply.
    pub fn perft_detailed(&mut self, depth: usize) -> PerftStats {
        let mut stats = PerftStats::default();
        if depth == 0 {
            stats.nodes = 1;
            return stats;
        }

        for mv in self.legal_moves() {
            if depth == 1 {
                stats.nodes += 1;
                if self.position.is_capture(mv) {
                    stats.captures += 1;
                }
                if self.position.en_passant_victim(mv).is_some() {
                    stats.en_passant += 1;
                }
                if mv.is_castling() {
                    stats.castles += 1;
                }
                if mv.promotion().is_some() {
                    stats.promotions += 1;
                }
                self.push(mv);
                if self.is_in_check() {
                    stats.checks += 1;
                }
                self.pop();
            } else {
                self.push(mv);
                stats += self.perft_detailed(depth - 1);
                self.pop();
            }
        }
        stats
    }

    /// Perft split by root move, in generation order.
    pub fn divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            self.push(mv);
            counts.push((mv, self.perft(depth - 1)));
            self.pop();
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_start_shallow() {
        let mut game = Game::new();
        assert_eq!(game.perft(0), 1);
        assert_eq!(game.perft(1), 20);
        assert_eq!(game.perft(2), 400);
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let mut game = Game::new();
        let split = game.divide(2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|&(_, count)| count == 20));
        let total: u64 = split.iter().map(|&(_, count)| count).sum();
        assert_eq!(total, 400);
    }

    #[test]
    fn test_detailed_kiwipete() {
        let mut game = Game::from_text(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let stats = game.perft_detailed(1);
        assert_eq!(stats.nodes, 48);
        assert_eq!(stats.captures, 8);
        assert_eq!(stats.castles, 2);
        assert_eq!(stats.checks, 0);

        let stats = game.perft_detailed(2);
        assert_eq!(
            stats,
            PerftStats {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
            }
        );
    }
}
