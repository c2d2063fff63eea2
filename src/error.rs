//! Error and signal types.
//!
//! Two families with different handling:
//!
//! - `MatchError`: caller-logic violations (`InvalidArgument`,
//!   `CardNotInHand`). Returned as `Err`, never retried or recovered.
//! - `DeckSignal`: expected shortages during normal play (`DeckExhausted`,
//!   `EmptyHand`, `OpponentSelectionFailed`). The controller records them in
//!   the match journal and keeps playing.

use serde::{Deserialize, Serialize};

use crate::core::{CardKey, Side};

/// A caller-side invariant was violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A constructor or config value was out of range.
    InvalidArgument(String),
    /// The card is not in the hand it was played from.
    CardNotInHand(CardKey),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MatchError::CardNotInHand(key) => write!(f, "Card {} is not in hand", key),
        }
    }
}

impl std::error::Error for MatchError {}

/// Convenience alias for results carrying a `MatchError`.
pub type MatchResult<T> = Result<T, MatchError>;

/// A recoverable shortage reported by a deck or the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSignal {
    /// One requested draw found the draw pile empty.
    DeckExhausted(Side),
    /// A random pick was requested from an empty hand.
    EmptyHand(Side),
    /// The opponent had nothing to commit this round.
    OpponentSelectionFailed,
}

impl std::fmt::Display for DeckSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckSignal::DeckExhausted(side) => write!(f, "{} deck is empty", side),
            DeckSignal::EmptyHand(side) => write!(f, "No cards in {} hand to select", side),
            DeckSignal::OpponentSelectionFailed => write!(f, "Opponent could not select a card"),
        }
    }
}
