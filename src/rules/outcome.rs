//! Duel outcomes from the player's perspective.

use serde::{Deserialize, Serialize};

/// Result of one duel, seen from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelOutcome {
    Win,
    Lose,
    Draw,
}

impl DuelOutcome {
    /// The same duel seen from the opponent.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            DuelOutcome::Win => DuelOutcome::Lose,
            DuelOutcome::Lose => DuelOutcome::Win,
            DuelOutcome::Draw => DuelOutcome::Draw,
        }
    }

    /// Cue identifier for audio/visual feedback.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DuelOutcome::Win => "win",
            DuelOutcome::Lose => "lose",
            DuelOutcome::Draw => "draw",
        }
    }
}

impl std::fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        assert_eq!(DuelOutcome::Win.reversed(), DuelOutcome::Lose);
        assert_eq!(DuelOutcome::Lose.reversed(), DuelOutcome::Win);
        assert_eq!(DuelOutcome::Draw.reversed(), DuelOutcome::Draw);
    }

    #[test]
    fn test_cue_names() {
        let cues: Vec<_> = [DuelOutcome::Win, DuelOutcome::Lose, DuelOutcome::Draw]
            .iter()
            .map(|o| o.to_string())
            .collect();
        assert_eq!(cues, vec!["win", "lose", "draw"]);
    }
}
