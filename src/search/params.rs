#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a node without legal moves is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminalScoring {
    /// Checkmate scores `MATE_SCORE - ply` for the winner, so a nearer mate
    /// is preferred; stalemate keeps the running score.
    #[default]
    MateSentinel,
    /// Every terminal node keeps the running score.
    Accumulated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    pub terminal_scoring: TerminalScoring,
}
