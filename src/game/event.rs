//! Notifications pushed from the engine to the view layer.

use super::board::Mark;
use serde::{Deserialize, Serialize};

/// State-change notification emitted by [`GameEngine`](super::GameEngine).
///
/// The engine mutates state and emits a description of what changed; a
/// separate adapter applies it to whatever presentation surface is in use
/// (terminal UI, test harness).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed; the view renders it and disables the cell.
    CellUpdated {
        /// Cell index (0-8).
        index: usize,
        /// Mark placed there.
        mark: Mark,
    },
    /// The turn passed to the given mark.
    TurnChanged {
        /// Mark now to move.
        mark: Mark,
    },
    /// The round ended; the view shows the result overlay.
    GameEnded {
        /// True if the round was a draw.
        draw: bool,
        /// Winning mark, `None` on a draw.
        winner: Option<Mark>,
    },
    /// One or both scores changed.
    ScoreboardUpdated {
        /// Player X's score.
        x: u32,
        /// Player O's score.
        o: u32,
    },
    /// The board was reset; the view re-enables all cells and hides overlays.
    BoardCleared,
}
