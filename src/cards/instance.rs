//! Card instances: a card value bound to its place in a deck.
//!
//! `CardInstance` pairs the immutable `Card` with the `CardKey` the owning
//! deck assigned when the card was added. The key is what the controller and
//! the presentation layer pass around; the card is what gets compared.

use serde::{Deserialize, Serialize};

use super::card::{Card, Element};
use crate::core::{CardKey, Side};

/// A specific card held by one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Identity within the owning deck.
    pub key: CardKey,

    /// The element/power value.
    pub card: Card,
}

impl CardInstance {
    /// Bind a card to a key.
    #[must_use]
    pub const fn new(key: CardKey, card: Card) -> Self {
        Self { key, card }
    }

    /// Side whose deck holds this card.
    #[must_use]
    pub const fn owner(&self) -> Side {
        self.key.owner()
    }

    #[must_use]
    pub const fn element(&self) -> Element {
        self.card.element()
    }

    #[must_use]
    pub const fn power(&self) -> u8 {
        self.card.power()
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.card, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(power: u8) -> Card {
        Card::new(Element::Fire, power).unwrap()
    }

    #[test]
    fn test_instance_accessors() {
        let instance = CardInstance::new(CardKey::new(Side::Opponent, 2), fire(6));

        assert_eq!(instance.owner(), Side::Opponent);
        assert_eq!(instance.element(), Element::Fire);
        assert_eq!(instance.power(), 6);
    }

    #[test]
    fn test_equal_cards_are_distinct_instances() {
        let a = CardInstance::new(CardKey::new(Side::Player, 0), fire(5));
        let b = CardInstance::new(CardKey::new(Side::Player, 1), fire(5));

        assert_eq!(a.card, b.card);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let instance = CardInstance::new(CardKey::new(Side::Player, 3), fire(5));
        assert_eq!(instance.to_string(), "Fire (5) [Player#3]");
    }
}
