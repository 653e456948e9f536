/// Score milestone reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// The win threshold was reached by this addition.
    Won {
        /// Final score at the moment of winning.
        score: u32,
    },
}

/// Accumulating score with a win threshold.
///
/// Once the threshold is reached further additions are ignored, matching
/// a session that freezes on the win screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    win_score: u32,
    won: bool,
}

impl ScoreBoard {
    /// Empty score with the given win threshold (minimum 1).
    #[must_use]
    pub fn new(win_score: u32) -> Self {
        Self {
            score: 0,
            win_score: win_score.max(1),
            won: false,
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the win threshold has been reached.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Add points. Returns [`ScoreEvent::Won`] exactly once, on the
    /// addition that crosses the threshold; additions after the win are
    /// ignored.
    pub fn add(&mut self, amount: u32) -> Option<ScoreEvent> {
        if self.won {
            return None;
        }
        self.score = self.score.saturating_add(amount);
        if self.score >= self.win_score {
            self.won = true;
            log::info!("win score reached: {}", self.score);
            return Some(ScoreEvent::Won { score: self.score });
        }
        None
    }
}
