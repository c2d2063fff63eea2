//! Match configuration.
//!
//! `MatchConfig` holds every tunable of a match: the winning score, turn
//! timing, how many cards each side draws per turn, how a timed-out turn is
//! scored, and the starter deck table. Defaults reproduce the standard game.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Element};
use crate::error::{MatchError, MatchResult};

/// Starter deck table: two cards of each element.
pub const STARTER_DECK: [(Element, u8); 6] = [
    (Element::Fire, 5),
    (Element::Water, 3),
    (Element::Snow, 7),
    (Element::Fire, 6),
    (Element::Water, 2),
    (Element::Snow, 8),
];

/// Journal length kept by default. Roughly forty rounds of events.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// How a round is scored when the player's turn timer runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeoutPolicy {
    /// A missing player card loses to any opponent card.
    #[default]
    OpponentWins,
    /// A missing player card scores the round as a draw.
    Draw,
}

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use elemental_clash::core::{MatchConfig, TimeoutPolicy};
///
/// let config = MatchConfig::default()
///     .with_winning_score(5)
///     .with_timeout_policy(TimeoutPolicy::Draw)
///     .instant();
///
/// assert_eq!(config.winning_score, 5);
/// assert_eq!(config.reveal_delay, 0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// First side to reach this score wins.
    pub winning_score: u32,

    /// Seconds the player has to commit a card.
    pub turn_duration: f32,

    /// Cards each side draws at the start of every player turn.
    pub draw_per_turn: usize,

    /// Seconds between both cards being committed and the comparison.
    pub reveal_delay: f32,

    /// Seconds between a round result and the next player turn.
    pub reset_delay: f32,

    /// Scoring of a round the player let time out on.
    pub timeout_policy: TimeoutPolicy,

    /// Cards each deck starts with, in insertion order before shuffling.
    pub starter_deck: Vec<Card>,

    /// Most events the match journal keeps; older ones are dropped first.
    pub history_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: 3,
            turn_duration: 15.0,
            draw_per_turn: 3,
            reveal_delay: 1.0,
            reset_delay: 2.0,
            timeout_policy: TimeoutPolicy::OpponentWins,
            starter_deck: starter_cards(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl MatchConfig {
    /// Zero both presentation delays so rounds resolve within the same call.
    #[must_use]
    pub fn instant(mut self) -> Self {
        self.reveal_delay = 0.0;
        self.reset_delay = 0.0;
        self
    }

    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    #[must_use]
    pub fn with_turn_duration(mut self, seconds: f32) -> Self {
        self.turn_duration = seconds;
        self
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_delays(mut self, reveal: f32, reset: f32) -> Self {
        self.reveal_delay = reveal;
        self.reset_delay = reset;
        self
    }

    #[must_use]
    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.timeout_policy = policy;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_starter_deck(mut self, cards: Vec<Card>) -> Self {
        self.starter_deck = cards;
        self
    }

    /// Check every value is usable for a match.
    pub fn validate(&self) -> MatchResult<()> {
        if self.winning_score == 0 {
            return Err(MatchError::InvalidArgument(
                "winning score must be at least 1".to_string(),
            ));
        }
        if !(self.turn_duration.is_finite() && self.turn_duration > 0.0) {
            return Err(MatchError::InvalidArgument(format!(
                "turn duration must be positive, got {}",
                self.turn_duration
            )));
        }
        for (name, delay) in [("reveal", self.reveal_delay), ("reset", self.reset_delay)] {
            if !(delay.is_finite() && delay >= 0.0) {
                return Err(MatchError::InvalidArgument(format!(
                    "{} delay must be non-negative, got {}",
                    name, delay
                )));
            }
        }
        // Deserialized tables bypass Card::new
        for card in &self.starter_deck {
            Card::new(card.element(), card.power())?;
        }
        Ok(())
    }
}

/// The starter table as cards.
#[must_use]
pub fn starter_cards() -> Vec<Card> {
    STARTER_DECK
        .iter()
        .filter_map(|&(element, power)| Card::new(element, power).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.winning_score, 3);
        assert_eq!(config.turn_duration, 15.0);
        assert_eq!(config.draw_per_turn, 3);
        assert_eq!(config.reveal_delay, 1.0);
        assert_eq!(config.reset_delay, 2.0);
        assert_eq!(config.timeout_policy, TimeoutPolicy::OpponentWins);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_starter_table() {
        let cards = starter_cards();
        assert_eq!(cards.len(), 6);

        for element in Element::ALL {
            assert_eq!(cards.iter().filter(|c| c.element() == element).count(), 2);
        }
        assert_eq!(cards[0], Card::new(Element::Fire, 5).unwrap());
        assert_eq!(cards[5], Card::new(Element::Snow, 8).unwrap());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default()
            .with_winning_score(1)
            .with_turn_duration(5.0)
            .with_draw_per_turn(1)
            .with_delays(0.5, 0.25)
            .with_timeout_policy(TimeoutPolicy::Draw)
            .with_history_limit(16);

        assert_eq!(config.history_limit, 16);
        assert_eq!(config.winning_score, 1);
        assert_eq!(config.turn_duration, 5.0);
        assert_eq!(config.draw_per_turn, 1);
        assert_eq!(config.reveal_delay, 0.5);
        assert_eq!(config.reset_delay, 0.25);
        assert_eq!(config.timeout_policy, TimeoutPolicy::Draw);
    }

    #[test]
    fn test_instant() {
        let config = MatchConfig::default().instant();
        assert_eq!(config.reveal_delay, 0.0);
        assert_eq!(config.reset_delay, 0.0);
        assert_eq!(config.turn_duration, 15.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MatchConfig::default().with_winning_score(0).validate().is_err());
        assert!(MatchConfig::default().with_turn_duration(0.0).validate().is_err());
        assert!(MatchConfig::default().with_turn_duration(f32::NAN).validate().is_err());
        assert!(MatchConfig::default().with_delays(-1.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_deserialized_bad_card() {
        let mut json = serde_json::to_value(MatchConfig::default()).unwrap();
        json["starter_deck"][0]["power"] = serde_json::json!(42);
        let config: MatchConfig = serde_json::from_value(json).unwrap();

        assert!(matches!(config.validate(), Err(MatchError::InvalidArgument(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MatchConfig::default().with_timeout_policy(TimeoutPolicy::Draw);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
