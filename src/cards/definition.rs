//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name,
//! cosmetic labels, and the dominance sets used when two cards meet.
//! Definitions are created once when the catalog is built and never change.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Set of card ids; catalogs are small so this stays inline.
pub type CardSet = SmallVec<[CardId; 4]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardDefinition, CardId};
///
/// let dragon = CardDefinition::new(CardId::new(0), "Blue Eyes White Dragon", "Paper")
///     .with_art("dragon.png")
///     .with_beats([CardId::new(1)])
///     .with_loses_to([CardId::new(2)]);
///
/// assert!(dragon.beats(CardId::new(1)));
/// assert!(dragon.loses_to(CardId::new(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Cosmetic type label ("Paper", "Rock", ...). Never consulted by rules.
    pub card_type: String,

    /// Image file name for the face-up card.
    pub art: String,

    /// Cards this card defeats.
    pub beats: CardSet,

    /// Cards that defeat this card.
    pub loses_to: CardSet,
}

impl CardDefinition {
    /// Create a card with no dominance relations.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            art: String::new(),
            beats: CardSet::new(),
            loses_to: CardSet::new(),
        }
    }

    /// Set the art file (builder pattern).
    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }

    /// Add cards this card defeats.
    #[must_use]
    pub fn with_beats(mut self, ids: impl IntoIterator<Item = CardId>) -> Self {
        self.beats.extend(ids);
        self
    }

    /// Add cards that defeat this card.
    #[must_use]
    pub fn with_loses_to(mut self, ids: impl IntoIterator<Item = CardId>) -> Self {
        self.loses_to.extend(ids);
        self
    }

    /// Does this card defeat `other`?
    #[must_use]
    pub fn beats(&self, other: CardId) -> bool {
        self.beats.contains(&other)
    }

    /// Is this card defeated by `other`?
    #[must_use]
    pub fn loses_to(&self, other: CardId) -> bool {
        self.loses_to.contains(&other)
    }

    /// Type line shown in the card preview.
    #[must_use]
    pub fn attribute_line(&self) -> String {
        format!("Attribute: {}", self.card_type)
    }
}
