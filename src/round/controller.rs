//! Round controller: the state machine for one duel at a time.
//!
//! ```text
//! Idle ──start_round──▶ AwaitingSelection ──select_card──▶ Resolving ──▶ Resolved
//!  ▲                                                          │            │
//!  └────────────── invalid card reference ────────────────────┘            │
//!  └──────────────────────────── acknowledge ──────────────────────────────┘
//! ```
//!
//! Every transition runs to completion before the next input is handled.
//! The controller is driven through `&mut self`, so a feedback adapter
//! cannot re-enter it mid-round; the phase tag is the only gate needed.

use tracing::{debug, info, warn};

use crate::cards::{CardCatalog, CardDefinition, CardId};
use crate::core::{ConfigError, DuelConfig, GameRng, Side, Sides};
use crate::picker::{CardPicker, UniformPicker};
use crate::rules::{DuelOutcome, DuelResolver, ResolveError};
use crate::score::{Score, ScoreTracker};

use super::feedback::{ActionLabel, DuelFeedback};
use super::state::{Hand, RoundPhase, RoundState};

/// Cards and outcome of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub player_card: CardId,
    pub computer_card: CardId,
    pub outcome: DuelOutcome,
}

/// What happened to a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The gate was closed; nothing changed.
    Ignored,
    /// A card id was not in the catalog; the round was abandoned.
    Dropped(ResolveError),
    /// The round resolved and the score was updated.
    Resolved(RoundResult),
}

/// What happened to a continue signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acknowledgement {
    /// No resolved round to acknowledge.
    Ignored,
    /// Back to `Idle`, ready for the next deal.
    NextRound,
    /// Round state cleared and a fresh hand dealt.
    Restarted,
}

/// Owns the catalog, round state and score for one session.
pub struct RoundController<P: CardPicker, F: DuelFeedback> {
    catalog: CardCatalog,
    picker: P,
    feedback: F,
    config: DuelConfig,
    state: RoundState,
    score: ScoreTracker,
    label: Option<ActionLabel>,
    rounds_this_match: u32,
}

impl<F: DuelFeedback> RoundController<UniformPicker, F> {
    /// Create a controller that picks uniformly, seeded from `config.seed`.
    ///
    /// Fails if the config does not validate.
    pub fn with_config(
        catalog: CardCatalog,
        config: DuelConfig,
        feedback: F,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::from_seed_or_entropy(config.seed);
        info!(seed = rng.seed(), hand_size = config.hand_size, "session created");
        let picker = UniformPicker::new(&catalog, rng);
        Self::new(catalog, picker, feedback, config)
    }
}

impl<P: CardPicker, F: DuelFeedback> RoundController<P, F> {
    /// Create a controller with an explicit picker.
    ///
    /// Fails if the config does not validate.
    pub fn new(
        catalog: CardCatalog,
        picker: P,
        feedback: F,
        config: DuelConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog,
            picker,
            feedback,
            config,
            state: RoundState::new(),
            score: ScoreTracker::new(),
            label: None,
            rounds_this_match: 0,
        })
    }

    // === Transitions ===

    /// Deal a fresh hand to both sides.
    ///
    /// Valid from `Idle` or `Resolved`; returns false and changes nothing
    /// otherwise.
    pub fn start_round(&mut self) -> bool {
        if !self.state.phase.can_deal() {
            debug!(phase = ?self.state.phase, "start_round ignored");
            return false;
        }

        self.state.clear();
        self.label = None;
        self.feedback.hide_action();
        self.feedback.clear_card_details();
        self.feedback.clear_hands();

        let hand_size = self.config.hand_size;
        let picker = &mut self.picker;
        let hands: Sides<Hand> = Sides::new(|_| (0..hand_size).map(|_| picker.pick()).collect());
        for (side, hand) in hands.iter() {
            self.feedback.render_hand(side, hand);
        }
        self.state.hands = hands;

        self.state.phase = RoundPhase::AwaitingSelection;
        debug!(
            player_hand = ?self.state.hands.player.as_slice(),
            computer_hand = ?self.state.hands.computer.as_slice(),
            "round dealt"
        );
        true
    }

    /// Accept the player's card, resolve the duel and commit the score.
    ///
    /// Only valid in `AwaitingSelection`; any other phase is a no-op.
    pub fn select_card(&mut self, card: CardId) -> Selection {
        if !self.state.phase.accepts_selection() {
            debug!(%card, phase = ?self.state.phase, "selection ignored, gate closed");
            return Selection::Ignored;
        }
        // Close the gate before any feedback is dispatched.
        self.state.phase = RoundPhase::Resolving;

        self.feedback.clear_card_details();
        self.feedback.clear_hands();
        self.state.hands = Default::default();

        let computer = self.picker.pick();
        self.state.player_card = Some(card);
        self.state.computer_card = Some(computer);

        let outcome = match DuelResolver::new(&self.catalog).resolve(card, computer) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, player = %card, computer = %computer, "round dropped");
                self.state.clear();
                return Selection::Dropped(err);
            }
        };

        if let (Some(player_def), Some(computer_def)) =
            (self.catalog.get(card), self.catalog.get(computer))
        {
            self.feedback.reveal_cards(player_def, computer_def);
        }

        self.score.record(outcome);
        self.rounds_this_match = self.rounds_this_match.saturating_add(1);
        self.state.outcome = Some(outcome);
        let score = self.score.snapshot();
        self.feedback.display_score(&score);

        self.dispatch_cue(outcome);

        let label = match self.config.rounds_per_match {
            Some(limit) if self.rounds_this_match >= limit => ActionLabel::RestartPrompt,
            _ => ActionLabel::Outcome(outcome),
        };
        self.show_label(label);

        self.state.phase = RoundPhase::Resolved;
        info!(
            player = %card,
            computer = %computer,
            %outcome,
            wins = score.wins,
            losses = score.losses,
            "round resolved"
        );

        Selection::Resolved(RoundResult {
            player_card: card,
            computer_card: computer,
            outcome,
        })
    }

    /// Handle the continue signal on a resolved round.
    ///
    /// A restart label clears round state and deals again; any other label
    /// returns to `Idle`. The score is kept either way.
    pub fn acknowledge(&mut self) -> Acknowledgement {
        if self.state.phase != RoundPhase::Resolved {
            debug!(phase = ?self.state.phase, "acknowledge ignored");
            return Acknowledgement::Ignored;
        }

        let restart = self.label.is_some_and(ActionLabel::is_restart);
        self.label = None;
        self.feedback.hide_action();
        self.state.clear();

        if restart {
            info!("match restarted");
            self.rounds_this_match = 0;
            self.start_round();
            Acknowledgement::Restarted
        } else {
            Acknowledgement::NextRound
        }
    }

    /// Switch the action control of a resolved round to the restart prompt.
    pub fn prompt_restart(&mut self) -> bool {
        if self.state.phase != RoundPhase::Resolved {
            return false;
        }
        self.show_label(ActionLabel::RestartPrompt);
        true
    }

    /// Preview a card while the player is choosing.
    pub fn inspect_card(&mut self, card: CardId) -> bool {
        if !self.state.phase.accepts_selection() {
            return false;
        }
        match self.catalog.get(card) {
            Some(def) => {
                self.feedback.show_card_details(def);
                true
            }
            None => false,
        }
    }

    /// Zero the score and drop any round in progress.
    pub fn reset_session(&mut self) {
        info!(score = %self.score.snapshot(), "session reset");
        self.score.reset();
        self.rounds_this_match = 0;
        self.state.clear();
        self.label = None;
        self.feedback.hide_action();
        self.feedback.clear_card_details();
        self.feedback.clear_hands();
        self.feedback.display_score(&self.score.snapshot());
    }

    // === External event hooks ===

    /// The presentation layer is ready: deal the first round.
    pub fn on_session_ready(&mut self) -> bool {
        if let Err(err) = self.feedback.play_background_music() {
            warn!(error = %err, "background music unavailable");
        }
        self.feedback.display_score(&self.score.snapshot());
        self.start_round()
    }

    pub fn on_user_select(&mut self, card: CardId) -> Selection {
        self.select_card(card)
    }

    pub fn on_user_acknowledge(&mut self) -> Acknowledgement {
        self.acknowledge()
    }

    pub fn on_user_hover(&mut self, card: CardId) -> bool {
        self.inspect_card(card)
    }

    fn dispatch_cue(&mut self, outcome: DuelOutcome) {
        if let Err(err) = self.feedback.play_feedback(outcome) {
            warn!(error = %err, cue = outcome.as_str(), "feedback dispatch failed");
        }
    }

    fn show_label(&mut self, label: ActionLabel) {
        self.label = Some(label);
        self.feedback.display_outcome_message(&label);
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Cards currently dealt to a side.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        &self.state.hands[side]
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score.snapshot()
    }

    #[must_use]
    pub fn tracker(&self) -> &ScoreTracker {
        &self.score
    }

    #[must_use]
    pub fn action_label(&self) -> Option<ActionLabel> {
        self.label
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Look up a card in the session catalog.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardDefinition> {
        self.catalog.get(id)
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }
}
