//! Card catalog: the fixed, validated registry of playable cards.
//!
//! The `CardCatalog` stores every card in a fixed order and provides fast
//! lookup by `CardId`. Construction checks the dominance table and refuses
//! to build a catalog that is malformed; nothing is normalized silently.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{CardDefinition, CardId};

/// Dominance data rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,
    #[error("{card} is defined more than once")]
    DuplicateId { card: CardId },
    #[error("{card} lists itself in its dominance sets")]
    SelfReference { card: CardId },
    #[error("{card} references {missing}, which is not in the catalog")]
    UnknownReference { card: CardId, missing: CardId },
    #[error("{card} both beats and loses to {other}")]
    Contradiction { card: CardId, other: CardId },
    #[error("{card} {relation} {other}, but {other} does not list the inverse")]
    Asymmetric {
        card: CardId,
        other: CardId,
        relation: &'static str,
    },
}

/// Immutable registry of card definitions.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardCatalog, CardDefinition, CardId};
///
/// let catalog = CardCatalog::new([
///     CardDefinition::new(CardId::new(0), "Rock", "Rock")
///         .with_beats([CardId::new(1)]),
///     CardDefinition::new(CardId::new(1), "Scissors", "Scissors")
///         .with_loses_to([CardId::new(0)]),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Scissors");
/// assert!(catalog.get(CardId::new(9)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build and validate a catalog. Cards keep the order given.
    pub fn new(cards: impl IntoIterator<Item = CardDefinition>) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = cards.into_iter().collect();
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (pos, card) in cards.iter().enumerate() {
            if index.insert(card.id, pos).is_some() {
                return Err(CatalogError::DuplicateId { card: card.id });
            }
        }

        let catalog = Self { cards, index };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in three-card catalog.
    ///
    /// Dragon beats Magician, Magician beats Exodia, Exodia beats Dragon.
    pub fn standard() -> Result<Self, CatalogError> {
        let dragon = CardId::new(0);
        let magician = CardId::new(1);
        let exodia = CardId::new(2);

        Self::new([
            CardDefinition::new(dragon, "Blue Eyes White Dragon", "Paper")
                .with_art("dragon.png")
                .with_beats([magician])
                .with_loses_to([exodia]),
            CardDefinition::new(magician, "Dark Magician", "Rock")
                .with_art("magician.png")
                .with_beats([exodia])
                .with_loses_to([dragon]),
            CardDefinition::new(exodia, "Exodia", "Scissors")
                .with_art("exodia.png")
                .with_beats([dragon])
                .with_loses_to([magician]),
        ])
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for card in &self.cards {
            for &other in card.beats.iter().chain(card.loses_to.iter()) {
                if other == card.id {
                    return Err(CatalogError::SelfReference { card: card.id });
                }
                if !self.contains(other) {
                    return Err(CatalogError::UnknownReference {
                        card: card.id,
                        missing: other,
                    });
                }
            }

            if let Some(&other) = card.beats.iter().find(|id| card.loses_to.contains(id)) {
                return Err(CatalogError::Contradiction { card: card.id, other });
            }
        }

        for card in &self.cards {
            for &other in &card.beats {
                if !self.cards[self.index[&other]].loses_to(card.id) {
                    return Err(CatalogError::Asymmetric {
                        card: card.id,
                        other,
                        relation: "beats",
                    });
                }
            }
            for &other in &card.loses_to {
                if !self.cards[self.index[&other]].beats(card.id) {
                    return Err(CatalogError::Asymmetric {
                        card: card.id,
                        other,
                        relation: "loses to",
                    });
                }
            }
        }

        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// All cards in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &CardDefinition> + Clone {
        self.cards.iter()
    }

    /// All card ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + Clone + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> CardDefinition {
        CardDefinition::new(CardId::new(id), format!("Card {id}"), "Test")
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard().unwrap();

        assert_eq!(catalog.len(), 3);
        let names: Vec<_> = catalog.all().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Blue Eyes White Dragon", "Dark Magician", "Exodia"]);

        let dragon = catalog.get(CardId::new(0)).unwrap();
        assert!(dragon.beats(CardId::new(1)));
        assert!(dragon.loses_to(CardId::new(2)));
    }

    #[test]
    fn test_all_is_restartable() {
        let catalog = CardCatalog::standard().unwrap();
        let first: Vec<_> = catalog.ids().collect();
        let second: Vec<_> = catalog.ids().collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![CardId::new(0), CardId::new(1), CardId::new(2)]);
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = CardCatalog::standard().unwrap();
        assert!(catalog.get(CardId::new(99)).is_none());
        assert!(!catalog.contains(CardId::new(99)));
    }

    #[test]
    fn test_empty_rejected() {
        let err = CardCatalog::new(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CardCatalog::new([card(1), card(1)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { card: CardId::new(1) });
    }

    #[test]
    fn test_self_reference_rejected() {
        let err = CardCatalog::new([card(0).with_beats([CardId::new(0)])]).unwrap_err();
        assert_eq!(err, CatalogError::SelfReference { card: CardId::new(0) });
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let err = CardCatalog::new([card(0).with_loses_to([CardId::new(7)])]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownReference {
                card: CardId::new(0),
                missing: CardId::new(7),
            }
        );
    }

    #[test]
    fn test_contradiction_rejected() {
        let err = CardCatalog::new([
            card(0).with_beats([CardId::new(1)]).with_loses_to([CardId::new(1)]),
            card(1).with_beats([CardId::new(0)]).with_loses_to([CardId::new(0)]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::Contradiction {
                card: CardId::new(0),
                other: CardId::new(1),
            }
        );
    }

    #[test]
    fn test_mutual_beats_rejected() {
        let err = CardCatalog::new([
            card(0).with_beats([CardId::new(1)]),
            card(1).with_beats([CardId::new(0)]),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::Asymmetric { relation: "beats", .. }));
    }

    #[test]
    fn test_missing_inverse_rejected() {
        let err = CardCatalog::new([card(0), card(1).with_loses_to([CardId::new(0)])]).unwrap_err();

        assert_eq!(
            err,
            CatalogError::Asymmetric {
                card: CardId::new(1),
                other: CardId::new(0),
                relation: "loses to",
            }
        );
        assert_eq!(
            err.to_string(),
            "Card(1) loses to Card(0), but Card(0) does not list the inverse"
        );
    }

    #[test]
    fn test_neutral_pair_allowed() {
        let catalog = CardCatalog::new([card(0), card(1)]).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
