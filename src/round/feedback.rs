//! Boundary to the presentation layer.
//!
//! The controller drives a `DuelFeedback` implementation to show hands,
//! reveal cards, play cues and update the score and action control.
//! Only cue playback can fail; those failures are logged by the
//! controller and never change phase or score.

use thiserror::Error;

use crate::cards::{CardDefinition, CardId};
use crate::core::Side;
use crate::rules::DuelOutcome;
use crate::score::Score;

/// Cue playback failures.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("playback of `{cue}` was blocked by the platform")]
    Blocked { cue: String },
    #[error("cue `{cue}` is not available")]
    Unavailable { cue: String },
    #[error("feedback I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text on the action control once a round is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    /// Shows the round's outcome; acknowledging moves to the next round.
    Outcome(DuelOutcome),
    /// Asks for a restart; acknowledging re-deals immediately.
    RestartPrompt,
}

impl ActionLabel {
    #[must_use]
    pub const fn is_restart(self) -> bool {
        matches!(self, ActionLabel::RestartPrompt)
    }
}

impl std::fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionLabel::Outcome(DuelOutcome::Win) => f.write_str("Win"),
            ActionLabel::Outcome(DuelOutcome::Lose) => f.write_str("Lose"),
            ActionLabel::Outcome(DuelOutcome::Draw) => f.write_str("Draw"),
            ActionLabel::RestartPrompt => f.write_str("Restart"),
        }
    }
}

/// Presentation callbacks driven by the round controller.
///
/// Methods with default bodies are optional for adapters that have no
/// matching element.
pub trait DuelFeedback {
    /// Show a face-down hand for one side.
    fn render_hand(&mut self, side: Side, cards: &[CardId]);

    /// Remove both hands from the table.
    fn clear_hands(&mut self) {}

    /// Show both chosen cards face up.
    fn reveal_cards(&mut self, player: &CardDefinition, computer: &CardDefinition);

    /// Best-effort outcome cue.
    fn play_feedback(&mut self, outcome: DuelOutcome) -> Result<(), FeedbackError>;

    /// Best-effort background music at session start.
    fn play_background_music(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }

    /// Show the current score.
    fn display_score(&mut self, score: &Score);

    /// Show the action control with the given label.
    fn display_outcome_message(&mut self, label: &ActionLabel);

    /// Hide the action control.
    fn hide_action(&mut self) {}

    /// Preview a card under the pointer.
    fn show_card_details(&mut self, _card: &CardDefinition) {}

    /// Clear the preview panel.
    fn clear_card_details(&mut self) {}
}

/// Feedback sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFeedback;

impl DuelFeedback for NullFeedback {
    fn render_hand(&mut self, _side: Side, _cards: &[CardId]) {}

    fn reveal_cards(&mut self, _player: &CardDefinition, _computer: &CardDefinition) {}

    fn play_feedback(&mut self, _outcome: DuelOutcome) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn display_score(&mut self, _score: &Score) {}

    fn display_outcome_message(&mut self, _label: &ActionLabel) {}
}
