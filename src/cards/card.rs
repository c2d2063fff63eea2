//! Card values: an element and a power.
//!
//! A `Card` is immutable once created. Equality is by value; the identity of
//! a specific card held by a deck lives in `CardInstance`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MatchError, MatchResult};

/// Lowest legal card power.
pub const MIN_POWER: u8 = 1;

/// Highest legal card power.
pub const MAX_POWER: u8 = 10;

/// Card element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Snow,
}

impl Element {
    /// Every element, in table order.
    pub const ALL: [Element; 3] = [Element::Fire, Element::Water, Element::Snow];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Snow => "Snow",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = MatchError;

    /// Parse an element name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|element| element.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MatchError::InvalidArgument(format!("unknown element: {:?}", s)))
    }
}

/// An immutable element/power pair.
///
/// ## Example
///
/// ```
/// use elemental_clash::cards::{Card, Element};
///
/// let card = Card::new(Element::Fire, 7).unwrap();
/// assert_eq!(card.power(), 7);
/// assert_eq!(card.to_string(), "Fire (7)");
///
/// assert!(Card::new(Element::Snow, 0).is_err());
/// assert!(Card::parse("lava", 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    element: Element,
    power: u8,
}

impl Card {
    /// Create a card, rejecting powers outside `MIN_POWER..=MAX_POWER`.
    pub fn new(element: Element, power: u8) -> MatchResult<Self> {
        if !(MIN_POWER..=MAX_POWER).contains(&power) {
            return Err(MatchError::InvalidArgument(format!(
                "power {} outside {}..={}",
                power, MIN_POWER, MAX_POWER
            )));
        }
        Ok(Self { element, power })
    }

    /// Create a card from an element name.
    pub fn parse(element: &str, power: u8) -> MatchResult<Self> {
        Self::new(element.parse()?, power)
    }

    #[must_use]
    pub const fn element(self) -> Element {
        self.element
    }

    #[must_use]
    pub const fn power(self) -> u8 {
        self.power
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.element, self.power)
    }
}
