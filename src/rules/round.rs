//! Round comparison and match results.
//!
//! A round compares the power of the two committed cards. Either side may be
//! missing a card: the player when the turn timer ran out, the opponent when
//! its hand was empty. Missing cards never win:
//!
//! | player card | opponent card | outcome                          |
//! |-------------|---------------|----------------------------------|
//! | some        | some          | higher power wins, equal is draw |
//! | none        | some          | per `TimeoutPolicy`              |
//! | some        | none          | draw                             |
//! | none        | none          | draw                             |

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Side, TimeoutPolicy};

/// Result of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl RoundOutcome {
    /// Side that scores this round, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerWin => Some(Side::Player),
            RoundOutcome::OpponentWin => Some(Side::Opponent),
            RoundOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::PlayerWin => write!(f, "Player Wins the Round!"),
            RoundOutcome::OpponentWin => write!(f, "Opponent Wins the Round!"),
            RoundOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Result of a completed match. There is always exactly one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wins the Game!", self.winner)
    }
}

/// Compare the two committed cards.
#[must_use]
pub fn resolve_round(
    player: Option<&Card>,
    opponent: Option<&Card>,
    timeout_policy: TimeoutPolicy,
) -> RoundOutcome {
    use std::cmp::Ordering;

    match (player, opponent) {
        (Some(p), Some(o)) => match p.power().cmp(&o.power()) {
            Ordering::Greater => RoundOutcome::PlayerWin,
            Ordering::Less => RoundOutcome::OpponentWin,
            Ordering::Equal => RoundOutcome::Draw,
        },
        (None, Some(_)) => match timeout_policy {
            TimeoutPolicy::OpponentWins => RoundOutcome::OpponentWin,
            TimeoutPolicy::Draw => RoundOutcome::Draw,
        },
        (Some(_), None) | (None, None) => RoundOutcome::Draw,
    }
}
