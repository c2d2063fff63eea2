//! Match state: scores, phase, clock and the cards in the center.
//!
//! Owned and mutated only by `MatchController`; everyone else gets `&MatchState`.

use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;
use crate::cards::CardInstance;
use crate::core::{Side, SideMap};
use crate::rules::{GameResult, RoundOutcome};

/// Observable state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds won per side.
    pub scores: SideMap<u32>,

    /// Score that ends the match.
    pub winning_score: u32,

    /// Current phase.
    pub phase: TurnPhase,

    /// Seconds left in the player turn.
    pub remaining_time: f32,

    /// Seconds spent so far in the current delay phase.
    pub phase_elapsed: f32,

    /// Cards committed to the center this round.
    pub active_cards: SideMap<Option<CardInstance>>,

    /// The player has committed a card this turn.
    pub submitted: bool,

    /// Round number, starting at 1.
    pub round: u32,

    /// Result of the current round, cleared at reset.
    pub last_outcome: Option<RoundOutcome>,
}

impl MatchState {
    /// Fresh state at the start of the first player turn.
    #[must_use]
    pub fn new(winning_score: u32, turn_duration: f32) -> Self {
        Self {
            scores: SideMap::with_value(0),
            winning_score,
            phase: TurnPhase::PlayerTurn,
            remaining_time: turn_duration,
            phase_elapsed: 0.0,
            active_cards: SideMap::with_value(None),
            submitted: false,
            round: 0,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.scores[Side::Player]
    }

    #[must_use]
    pub fn opponent_score(&self) -> u32 {
        self.scores[Side::Opponent]
    }

    /// The side at or above the winning score, if any.
    ///
    /// Only one side scores per round, so at most one side can be there.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        self.scores
            .iter()
            .find(|&(_, &score)| score >= self.winning_score)
            .map(|(side, _)| side)
    }

    /// The final result once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.phase.is_terminal() {
            return None;
        }
        self.leader().map(|winner| GameResult { winner })
    }

    /// Remaining turn time rounded up to whole seconds, as a clock shows it.
    #[must_use]
    pub fn display_seconds(&self) -> u32 {
        self.remaining_time.max(0.0).ceil() as u32
    }
}
