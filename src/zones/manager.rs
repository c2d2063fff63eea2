//! Pile manager for card locations and movement.
//!
//! The `PileManager` tracks which pile every card of one deck is in and
//! keeps each pile's order. It supports:
//! - Appending new cards to a pile
//! - Moving a card from one pile to another (appended at the back)
//! - Taking the front card of a pile
//! - Shuffling a pile in place
//!
//! Every card is in exactly one pile; adding a key twice panics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardKey, GameRng};

/// The three places a deck's card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    /// Face-down remaining cards, drawn from the front.
    DrawPile,
    /// Cards available to play this round.
    Hand,
    /// Played cards; they never come back.
    Discard,
}

impl Pile {
    /// All piles, in lifecycle order.
    pub const ALL: [Pile; 3] = [Pile::DrawPile, Pile::Hand, Pile::Discard];

    const fn slot(self) -> usize {
        match self {
            Pile::DrawPile => 0,
            Pile::Hand => 1,
            Pile::Discard => 2,
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::DrawPile => write!(f, "draw pile"),
            Pile::Hand => write!(f, "hand"),
            Pile::Discard => write!(f, "discard"),
        }
    }
}

/// Manages card locations across the piles of one deck.
///
/// ## Usage
///
/// ```
/// use elemental_clash::zones::{Pile, PileManager};
/// use elemental_clash::core::{CardKey, Side};
///
/// let mut piles = PileManager::new();
/// let a = CardKey::new(Side::Player, 0);
/// let b = CardKey::new(Side::Player, 1);
///
/// piles.add(a, Pile::DrawPile);
/// piles.add(b, Pile::DrawPile);
///
/// // Front of the draw pile goes to the hand
/// assert_eq!(piles.move_front(Pile::DrawPile, Pile::Hand), Some(a));
/// assert_eq!(piles.cards(Pile::Hand), &[a]);
/// assert_eq!(piles.cards(Pile::DrawPile), &[b]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PileManager {
    /// Card locations: key -> pile
    locations: FxHashMap<CardKey, Pile>,

    /// Card order per pile, indexed by `Pile::slot`.
    order: [Vec<CardKey>; 3],
}

impl PileManager {
    /// Create a new empty pile manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new card to the back of a pile.
    ///
    /// Panics if the key is already tracked.
    pub fn add(&mut self, key: CardKey, pile: Pile) {
        if self.locations.contains_key(&key) {
            panic!("Card {} already exists in pile manager", key);
        }

        self.locations.insert(key, pile);
        self.order[pile.slot()].push(key);
    }

    /// Move a card to the back of another pile.
    ///
    /// Returns the old pile, or `None` if the card wasn't found.
    pub fn move_to(&mut self, key: CardKey, new_pile: Pile) -> Option<Pile> {
        let old_pile = self.locations.get(&key).copied()?;

        if old_pile == new_pile {
            return Some(old_pile);
        }

        self.order[old_pile.slot()].retain(|&k| k != key);
        self.locations.insert(key, new_pile);
        self.order[new_pile.slot()].push(key);

        Some(old_pile)
    }

    /// Move the front card of `from` to the back of `to`.
    ///
    /// Returns the moved card, or `None` if `from` is empty.
    pub fn move_front(&mut self, from: Pile, to: Pile) -> Option<CardKey> {
        let key = self.front(from)?;
        self.move_to(key, to);
        Some(key)
    }

    /// Get the pile a card is in.
    #[must_use]
    pub fn location(&self, key: CardKey) -> Option<Pile> {
        self.locations.get(&key).copied()
    }

    /// Check if a card is in a specific pile.
    #[must_use]
    pub fn is_in(&self, key: CardKey, pile: Pile) -> bool {
        self.locations.get(&key) == Some(&pile)
    }

    /// Cards in a pile, front first.
    #[must_use]
    pub fn cards(&self, pile: Pile) -> &[CardKey] {
        &self.order[pile.slot()]
    }

    /// Get the number of cards in a pile.
    #[must_use]
    pub fn size(&self, pile: Pile) -> usize {
        self.order[pile.slot()].len()
    }

    /// The front card of a pile.
    #[must_use]
    pub fn front(&self, pile: Pile) -> Option<CardKey> {
        self.order[pile.slot()].first().copied()
    }

    /// Shuffle a pile in place.
    pub fn shuffle(&mut self, pile: Pile, rng: &mut GameRng) {
        rng.shuffle(&mut self.order[pile.slot()]);
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    fn key(serial: u32) -> CardKey {
        CardKey::new(Side::Player, serial)
    }

    #[test]
    fn test_add_and_locate() {
        let mut piles = PileManager::new();

        piles.add(key(0), Pile::DrawPile);
        piles.add(key(1), Pile::Hand);

        assert_eq!(piles.location(key(0)), Some(Pile::DrawPile));
        assert_eq!(piles.location(key(1)), Some(Pile::Hand));
        assert_eq!(piles.location(key(9)), None);
        assert!(piles.is_in(key(1), Pile::Hand));
        assert!(!piles.is_in(key(1), Pile::Discard));
    }

    #[test]
    fn test_order_is_insertion_order() {
        let mut piles = PileManager::new();
        for i in 0..4 {
            piles.add(key(i), Pile::DrawPile);
        }

        assert_eq!(piles.cards(Pile::DrawPile), &[key(0), key(1), key(2), key(3)]);
        assert_eq!(piles.front(Pile::DrawPile), Some(key(0)));
    }

    #[test]
    fn test_move_between_piles() {
        let mut piles = PileManager::new();
        piles.add(key(0), Pile::Hand);

        let old = piles.move_to(key(0), Pile::Discard);

        assert_eq!(old, Some(Pile::Hand));
        assert_eq!(piles.location(key(0)), Some(Pile::Discard));
        assert_eq!(piles.size(Pile::Hand), 0);
        assert_eq!(piles.size(Pile::Discard), 1);
        assert_eq!(piles.move_to(key(5), Pile::Hand), None);
    }

    #[test]
    fn test_move_to_same_pile_is_noop() {
        let mut piles = PileManager::new();
        piles.add(key(0), Pile::Hand);
        piles.add(key(1), Pile::Hand);

        assert_eq!(piles.move_to(key(0), Pile::Hand), Some(Pile::Hand));
        assert_eq!(piles.cards(Pile::Hand), &[key(0), key(1)]);
    }

    #[test]
    fn test_move_front() {
        let mut piles = PileManager::new();
        piles.add(key(0), Pile::DrawPile);
        piles.add(key(1), Pile::DrawPile);

        assert_eq!(piles.move_front(Pile::DrawPile, Pile::Hand), Some(key(0)));
        assert_eq!(piles.move_front(Pile::DrawPile, Pile::Hand), Some(key(1)));
        assert_eq!(piles.move_front(Pile::DrawPile, Pile::Hand), None);

        assert_eq!(piles.cards(Pile::Hand), &[key(0), key(1)]);
        assert_eq!(piles.total_cards(), 2);
    }

    #[test]
    fn test_shuffle() {
        let mut piles = PileManager::new();
        for i in 0..20 {
            piles.add(key(i), Pile::DrawPile);
        }

        let before = piles.cards(Pile::DrawPile).to_vec();
        let mut rng = GameRng::new(42);
        piles.shuffle(Pile::DrawPile, &mut rng);
        let after = piles.cards(Pile::DrawPile).to_vec();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
        for k in &before {
            assert!(piles.is_in(*k, Pile::DrawPile));
        }
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_key_panics() {
        let mut piles = PileManager::new();
        piles.add(key(0), Pile::DrawPile);
        piles.add(key(0), Pile::Hand);
    }
}
