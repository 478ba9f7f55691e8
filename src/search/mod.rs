//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Incremental material + piece-square evaluation threaded through the
//!   recursion instead of re-scoring the board at the leaves
//! - Delta-based move ordering at every node
//! - Configurable scoring of positions without legal moves
//! - Cancellation between root moves through a [`StopFlag`]
//!
//! Moves are tried through the game's own push/pop history, the same path
//! used by the legality filter.

mod move_order;
mod params;
mod tables;

use log::{debug, trace};

use crate::board::Move;
use crate::game::Game;
use crate::sync::StopFlag;
use move_order::order_moves;

pub use params::{SearchParams, TerminalScoring};

/// Magnitude of a checkmate score before the ply adjustment
pub const MATE_SCORE: i32 = 1_000_000;

const INFINITY: i32 = i32::MAX / 2;

/// What to search: depth in plies and an optional stop flag.
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    pub depth: u32,
    pub stop: Option<StopFlag>,
}

impl SearchLimits {
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits { depth, stop: None }
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }
}

/// Counters for one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Result of a search
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// `None` at depth 0 or when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score from the searching side's view, relative to the root
    pub score: i32,
    pub stats: SearchStats,
}

struct Searcher<'a> {
    game: &'a mut Game,
    params: &'a SearchParams,
    stop: Option<&'a StopFlag>,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn stopped(&self) -> bool {
        self.stop.is_some_and(StopFlag::is_stopped)
    }

    fn terminal_score(&self, ai_side: bool, ply: i32, score: i32) -> i32 {
        match self.params.terminal_scoring {
            TerminalScoring::Accumulated => score,
            TerminalScoring::MateSentinel => {
                if !self.game.is_in_check() {
                    score
                } else if ai_side {
                    -(MATE_SCORE - ply)
                } else {
                    MATE_SCORE - ply
                }
            }
        }
    }

    fn alpha_beta(
        &mut self,
        depth: u32,
        ply: i32,
        ai_side: bool,
        mut alpha: i32,
        mut beta: i32,
        score: i32,
    ) -> (Option<Move>, i32) {
        self.stats.nodes += 1;
        if depth == 0 {
            return (None, score);
        }

        let moves = self.game.legal_moves();
        if moves.is_empty() {
            return (None, self.terminal_score(ai_side, ply, score));
        }
        let ordered = order_moves(self.game.position(), moves, ai_side);

        let mut best_move = None;
        let mut best_score = if ai_side { -INFINITY } else { INFINITY };

        for (i, scored) in ordered.iter().enumerate() {
            if ply == 0 && i > 0 && self.stopped() {
                debug!("search stopped after {} root moves", i);
                break;
            }

            self.game.push(scored.mv);
            let (_, child) =
                self.alpha_beta(depth - 1, ply + 1, !ai_side, alpha, beta, score + scored.score);
            self.game.pop();

            if ply == 0 {
                trace!("root move {} scored {}", scored.mv, child);
            }

            if ai_side {
                if child > best_score {
                    best_score = child;
                    best_move = Some(scored.mv);
                }
                alpha = alpha.max(child);
            } else {
                if child < best_score {
                    best_score = child;
                    best_move = Some(scored.mv);
                }
                beta = beta.min(child);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_move, best_score)
    }
}

/// Search with default parameters.
pub fn find_best_move(game: &mut Game, limits: &SearchLimits) -> SearchResult {
    find_best_move_with_params(game, limits, &SearchParams::default())
}

/// Search the current position of `game` for the side to move.
///
/// The game is returned to its starting position, history included.
pub fn find_best_move_with_params(
    game: &mut Game,
    limits: &SearchLimits,
    params: &SearchParams,
) -> SearchResult {
    let history_before = game.history_len();
    let mut searcher = Searcher {
        game: &mut *game,
        params,
        stop: limits.stop.as_ref(),
        stats: SearchStats::default(),
    };
    let (best_move, score) = searcher.alpha_beta(limits.depth, 0, true, -INFINITY, INFINITY, 0);
    let stats = searcher.stats;
    debug_assert_eq!(game.history_len(), history_before);

    match best_move {
        Some(mv) => debug!(
            "depth {} best {} score {} nodes {} cutoffs {}",
            limits.depth, mv, score, stats.nodes, stats.cutoffs
        ),
        None => debug!("depth {} found no move", limits.depth),
    }
    SearchResult {
        best_move,
        score,
        stats,
    }
}

impl Game {
    /// Best move for the side to move at a fixed depth.
    pub fn best_move(&mut self, depth: u32) -> Option<Move> {
        find_best_move(self, &SearchLimits::depth(depth)).best_move
    }
}
