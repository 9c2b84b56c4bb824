//! # card-duel
//!
//! A single-round card duel engine. The player picks one of five
//! face-down cards, the computer picks at random, and the two cards are
//! compared through a fixed rock-paper-scissors style dominance table.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `DuelResolver` only reads the catalog. Score and
//!    round state change in one place, the `RoundController`.
//!
//! 2. **Explicit Phases**: The input gate is the `RoundPhase` tag. A
//!    selection outside `AwaitingSelection` is a no-op, never queued.
//!
//! 3. **Fail Fast, Degrade Gracefully**: A malformed catalog is rejected at
//!    construction. Everything at runtime falls back to a safe state:
//!    unknown card ids drop the round, failed cues are logged and ignored.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration
//! - `cards`: Card definitions and the validated catalog
//! - `rules`: Outcomes and the dominance resolver
//! - `picker`: Uniform and scripted card picks
//! - `score`: Win/loss bookkeeping
//! - `round`: Round state machine and presentation boundary
//! - `logging`: Tracing subscriber setup
//!
//! ## Example
//!
//! ```
//! use card_duel::{CardCatalog, CardId, DuelConfig, NullFeedback, RoundController, Selection};
//!
//! let catalog = CardCatalog::standard().unwrap();
//! let mut ctl =
//!     RoundController::with_config(catalog, DuelConfig::new().with_seed(1), NullFeedback).unwrap();
//!
//! assert!(ctl.on_session_ready());
//! let selection = ctl.on_user_select(CardId::new(0));
//! assert!(matches!(selection, Selection::Resolved(_)));
//! ```

pub mod cards;
pub mod core;
pub mod logging;
pub mod picker;
pub mod round;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::core::{ConfigError, DuelConfig, GameRng, Side, Sides};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CatalogError};

pub use crate::rules::{DuelOutcome, DuelResolver, ResolveError};

pub use crate::picker::{CardPicker, ScriptedPicker, UniformPicker};

pub use crate::score::{Score, ScoreTracker};

pub use crate::round::{
    Acknowledgement, ActionLabel, DuelFeedback, FeedbackError, Hand, NullFeedback,
    RoundController, RoundPhase, RoundResult, RoundState, Selection,
};
