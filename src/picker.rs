//! Opponent and dealer card picks.
//!
//! Picks are sampled with replacement from the full catalog: there is no
//! deck, a hand may repeat a card, and no pick remembers earlier ones.
//!
//! - `UniformPicker`: uniform over the catalog, driven by `GameRng`
//! - `ScriptedPicker`: replays a fixed sequence, for tests and replays

use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId};
use crate::core::GameRng;

/// Source of card ids for dealing hands and the opponent's card.
pub trait CardPicker {
    /// Pick one card id.
    fn pick(&mut self) -> CardId;
}

/// Uniform sampling over every card in the catalog.
#[derive(Clone, Debug)]
pub struct UniformPicker {
    ids: SmallVec<[CardId; 8]>,
    rng: GameRng,
}

impl UniformPicker {
    /// Create a picker over the catalog's cards.
    #[must_use]
    pub fn new(catalog: &CardCatalog, rng: GameRng) -> Self {
        Self {
            ids: catalog.ids().collect(),
            rng,
        }
    }

    /// Seed used by the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl CardPicker for UniformPicker {
    fn pick(&mut self) -> CardId {
        // Catalogs are never empty, so the index is always in range.
        self.ids[self.rng.gen_index(self.ids.len())]
    }
}

/// Replays a fixed sequence of ids, cycling when it runs out.
///
/// The ids are not checked against any catalog, so a script can feed
/// unknown ids to exercise the invalid-reference path.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    script: Vec<CardId>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Create from a non-empty script.
    ///
    /// Panics if `script` is empty.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = CardId>) -> Self {
        let script: Vec<CardId> = script.into_iter().collect();
        assert!(!script.is_empty(), "ScriptedPicker needs at least one id");
        Self { script, cursor: 0 }
    }

    /// Always pick the same card.
    #[must_use]
    pub fn always(id: CardId) -> Self {
        Self::new([id])
    }
}

impl CardPicker for ScriptedPicker {
    fn pick(&mut self) -> CardId {
        let id = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        id
    }
}
