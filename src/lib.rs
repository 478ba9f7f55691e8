pub mod board;
pub mod game;
pub mod search;
pub mod sync;

pub use board::{Color, Move, Piece, Position, Square};
pub use game::{Game, GameStatus};
pub use search::{find_best_move, SearchLimits, SearchResult};
