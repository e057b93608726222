//! Player identity and cumulative score.

use super::board::Mark;
use serde::{Deserialize, Serialize};

/// A player: a fixed mark and a score that accumulates across rounds.
///
/// Scores survive board resets and only change through the engine's
/// end-of-round handling or an explicit score reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    score: u32,
}

impl Player {
    /// Creates a player with the given mark and a zero score.
    pub fn new(mark: Mark) -> Self {
        Self { mark, score: 0 }
    }

    /// Returns this player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns this player's current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds one won round to the score. No upper bound.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Resets the score to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_lifecycle() {
        let mut player = Player::new(Mark::X);
        assert_eq!(player.score(), 0);
        player.increment_score();
        player.increment_score();
        assert_eq!(player.score(), 2);
        player.reset_score();
        assert_eq!(player.score(), 0);
        assert_eq!(player.mark(), Mark::X);
    }
}
