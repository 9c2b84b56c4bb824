//! Round lifecycle: state, presentation boundary and the controller.
//!
//! ## Key Types
//!
//! - `RoundPhase` / `RoundState`: the phase gate and in-flight round data
//! - `DuelFeedback`: callbacks into the presentation layer
//! - `RoundController`: drives deal → select → resolve → acknowledge

pub mod controller;
pub mod feedback;
pub mod state;

pub use controller::{Acknowledgement, RoundController, RoundResult, Selection};
pub use feedback::{ActionLabel, DuelFeedback, FeedbackError, NullFeedback};
pub use state::{Hand, RoundPhase, RoundState};
