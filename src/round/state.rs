//! Round lifecycle state.
//!
//! The phase tag is the input gate: a selection is accepted only while the
//! phase is `AwaitingSelection`, and the controller moves it to
//! `Resolving` before doing anything else with the selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::Sides;
use crate::rules::DuelOutcome;

/// Face-down cards dealt to one side. Duplicates are allowed.
pub type Hand = SmallVec<[CardId; 8]>;

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No hand on the table.
    #[default]
    Idle,
    /// Hands dealt, waiting for the player's pick.
    AwaitingSelection,
    /// Input locked while the pick is resolved and feedback dispatched.
    Resolving,
    /// Outcome shown, waiting for the continue signal.
    Resolved,
}

impl RoundPhase {
    /// Can a new round be dealt from this phase?
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, RoundPhase::Idle | RoundPhase::Resolved)
    }

    /// Is the input gate open?
    #[must_use]
    pub const fn accepts_selection(self) -> bool {
        matches!(self, RoundPhase::AwaitingSelection)
    }
}

/// The controller's per-round state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    pub hands: Sides<Hand>,
    pub player_card: Option<CardId>,
    pub computer_card: Option<CardId>,
    pub outcome: Option<DuelOutcome>,
}

impl RoundState {
    /// Fresh idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything about the in-flight round and return to `Idle`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_phase_gates() {
        assert!(RoundPhase::Idle.can_deal());
        assert!(RoundPhase::Resolved.can_deal());
        assert!(!RoundPhase::AwaitingSelection.can_deal());
        assert!(!RoundPhase::Resolving.can_deal());

        assert!(RoundPhase::AwaitingSelection.accepts_selection());
        assert!(!RoundPhase::Resolving.accepts_selection());
        assert!(!RoundPhase::Resolved.accepts_selection());
        assert!(!RoundPhase::Idle.accepts_selection());
    }

    #[test]
    fn test_clear() {
        let mut state = RoundState::new();
        state.phase = RoundPhase::Resolved;
        state.hands[Side::Player].push(CardId::new(1));
        state.player_card = Some(CardId::new(1));
        state.computer_card = Some(CardId::new(2));
        state.outcome = Some(DuelOutcome::Win);

        state.clear();

        assert_eq!(state, RoundState::default());
        assert_eq!(state.phase, RoundPhase::Idle);
    }
}
