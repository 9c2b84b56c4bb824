//! Duel resolution over the card catalog.
//!
//! Resolution is pure: it reads the catalog and returns an outcome. It
//! never touches score or round state, so callers decide what to commit.

use thiserror::Error;

use crate::cards::{CardCatalog, CardId};

use super::outcome::DuelOutcome;

/// Resolution failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid card reference: {card} is not in the catalog")]
    InvalidCardReference { card: CardId },
}

/// Compares two cards using the catalog's dominance table.
///
/// ```
/// use card_duel::cards::{CardCatalog, CardId};
/// use card_duel::rules::{DuelOutcome, DuelResolver};
///
/// let catalog = CardCatalog::standard().unwrap();
/// let resolver = DuelResolver::new(&catalog);
///
/// let dragon = CardId::new(0);
/// let magician = CardId::new(1);
/// assert_eq!(resolver.resolve(dragon, magician), Ok(DuelOutcome::Win));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DuelResolver<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> DuelResolver<'a> {
    /// Create a resolver over a catalog.
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a duel from the player's perspective.
    ///
    /// The win check runs before the loss check. A valid catalog never
    /// satisfies both, but the order is fixed.
    pub fn resolve(&self, player: CardId, computer: CardId) -> Result<DuelOutcome, ResolveError> {
        let player_card = self
            .catalog
            .get(player)
            .ok_or(ResolveError::InvalidCardReference { card: player })?;
        if !self.catalog.contains(computer) {
            return Err(ResolveError::InvalidCardReference { card: computer });
        }

        let outcome = if player_card.beats(computer) {
            DuelOutcome::Win
        } else if player_card.loses_to(computer) {
            DuelOutcome::Lose
        } else {
            DuelOutcome::Draw
        };
        Ok(outcome)
    }
}
