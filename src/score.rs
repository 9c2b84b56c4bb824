//! Cumulative session score.
//!
//! `ScoreTracker` owns the win/loss counters. Counters only grow; the one
//! way back to zero is an explicit session reset.

use serde::{Deserialize, Serialize};

use crate::rules::DuelOutcome;

/// Win/loss counters as shown to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Win: {} | Lose: {}", self.wins, self.losses)
    }
}

/// Owner of the session score.
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    score: Score,
    rounds_recorded: u32,
}

impl ScoreTracker {
    /// Create a tracker at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.score.wins = self.score.wins.saturating_add(1);
        self.rounds_recorded = self.rounds_recorded.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.score.losses = self.score.losses.saturating_add(1);
        self.rounds_recorded = self.rounds_recorded.saturating_add(1);
    }

    /// Counts the round but leaves both counters untouched.
    pub fn record_draw(&mut self) {
        self.rounds_recorded = self.rounds_recorded.saturating_add(1);
    }

    /// Dispatch on an outcome.
    pub fn record(&mut self, outcome: DuelOutcome) {
        match outcome {
            DuelOutcome::Win => self.record_win(),
            DuelOutcome::Lose => self.record_loss(),
            DuelOutcome::Draw => self.record_draw(),
        }
    }

    /// Current counters.
    #[must_use]
    pub fn snapshot(&self) -> Score {
        self.score
    }

    /// Resolved rounds recorded, draws included.
    #[must_use]
    pub fn rounds_recorded(&self) -> u32 {
        self.rounds_recorded
    }

    /// Draws recorded so far.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.rounds_recorded
            .saturating_sub(self.score.wins)
            .saturating_sub(self.score.losses)
    }

    /// Zero everything. Only a session reset calls this.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
