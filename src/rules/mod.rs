//! Round rules: card comparison and match results.

pub mod round;

pub use round::{resolve_round, GameResult, RoundOutcome};
