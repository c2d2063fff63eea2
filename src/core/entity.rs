//! Card identity while a card is held by a deck.
//!
//! Cards are plain values: two `(Fire, 5)` cards compare equal. Once a card is
//! added to a deck it also gets a `CardKey`, which is what the hand, the draw
//! pile and the controller use to tell equal cards apart.
//!
//! ## Key Layout
//!
//! A key is the owning side plus a serial number handed out by that side's
//! deck in insertion order. Keys are unique across a match because the two
//! sides never share a deck.
//!
//! ```
//! use elemental_clash::core::{CardKey, Side};
//!
//! let first = CardKey::new(Side::Player, 0);
//! let twin = CardKey::new(Side::Opponent, 0);
//!
//! assert_ne!(first, twin);
//! assert_eq!(first.owner(), Side::Player);
//! ```

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Positional identity of a card inside one side's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    owner: Side,
    serial: u32,
}

impl CardKey {
    /// Create a key for the `serial`-th card added to `owner`'s deck.
    #[must_use]
    pub const fn new(owner: Side, serial: u32) -> Self {
        Self { owner, serial }
    }

    /// The side whose deck holds this card.
    #[must_use]
    pub const fn owner(self) -> Side {
        self.owner
    }

    /// Insertion serial within the owning deck.
    #[must_use]
    pub const fn serial(self) -> u32 {
        self.serial
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.owner, self.serial)
    }
}
