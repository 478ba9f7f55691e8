//! Cross-thread access to a game and its search.
//!
//! A [`Game`] is not safe to drive from several threads at once: moves, undo
//! and the search all mutate the one position and history stack. These
//! helpers serialize that access and let another thread cancel a search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::game::Game;
use crate::search::{find_best_move, SearchLimits, SearchResult};

/// Cancellation request shared between a search and its controller.
///
/// Clones observe the same flag. The search polls it between root moves.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag raised from the start; a search given it tries one root move.
    #[must_use]
    pub fn stopped() -> Self {
        let flag = Self::new();
        flag.stop();
        flag
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Lower the flag so the next search runs to full depth.
    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl From<Arc<AtomicBool>> for StopFlag {
    fn from(raised: Arc<AtomicBool>) -> Self {
        StopFlag(raised)
    }
}

/// A game behind a mutex, plus the stop flag for searches run on it.
///
/// Clones share both the game and the flag.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
    stop: StopFlag,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            game: Arc::new(Mutex::new(game)),
            stop: StopFlag::new(),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.game.lock();
        f(&mut game)
    }

    /// Search the current position, holding the game for the whole search.
    ///
    /// Clears the stop flag first, so a `stop` issued before the search
    /// starts is discarded.
    pub fn search(&self, depth: u32) -> SearchResult {
        self.stop.reset();
        let limits = SearchLimits::depth(depth).with_stop(self.stop.clone());
        self.with(|game| find_best_move(game, &limits))
    }

    /// Ask a running search to finish after its current root move.
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }
}
