//! Table sides and per-side storage.
//!
//! A duel always has exactly two sides: the human player and the
//! computer opponent. `Sides<T>` stores one value per side and is indexed
//! by `Side`, so per-side data never goes through a raw index.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Lowercase label used by front-ends.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per side.
///
/// ```
/// use card_duel::core::{Side, Sides};
///
/// let mut counts: Sides<u32> = Sides::default();
/// counts[Side::Computer] += 2;
///
/// assert_eq!(counts[Side::Player], 0);
/// assert_eq!(counts[Side::Computer], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides<T> {
    pub player: T,
    pub computer: T,
}

impl<T> Sides<T> {
    /// Build both entries from a factory.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            computer: factory(Side::Computer),
        }
    }

    /// Iterate over `(Side, &T)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Computer, &self.computer)].into_iter()
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }
}
