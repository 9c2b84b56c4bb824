//! Duel rules: outcomes and the dominance resolver.
//!
//! `DuelResolver` is the only place that interprets the dominance table.
//! The round controller calls into it but never compares cards itself.

pub mod outcome;
pub mod resolver;

pub use outcome::DuelOutcome;
pub use resolver::{DuelResolver, ResolveError};
