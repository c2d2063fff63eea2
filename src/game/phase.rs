//! Turn phases.
//!
//! ```text
//! PlayerTurn ─► OpponentTurn ─► Resolving ─┬─► RoundReset ─► PlayerTurn
//!                                          └─► GameOver
//! ```

use serde::{Deserialize, Serialize};

/// Current state of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the player's card; the turn clock runs.
    PlayerTurn,
    /// The opponent picks its card.
    OpponentTurn,
    /// Both cards are down; comparison follows the reveal delay.
    Resolving,
    /// Result shown; the next turn follows the reset delay.
    RoundReset,
    /// A side reached the winning score. Terminal.
    GameOver,
}

impl TurnPhase {
    /// No transition leaves this phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::GameOver)
    }

    /// Phases that advance on `tick`.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(
            self,
            TurnPhase::PlayerTurn | TurnPhase::Resolving | TurnPhase::RoundReset
        )
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::PlayerTurn => "PlayerTurn",
            TurnPhase::OpponentTurn => "OpponentTurn",
            TurnPhase::Resolving => "Resolving",
            TurnPhase::RoundReset => "RoundReset",
            TurnPhase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        assert!(TurnPhase::GameOver.is_terminal());
        assert!(!TurnPhase::RoundReset.is_terminal());
    }

    #[test]
    fn test_timed() {
        assert!(TurnPhase::PlayerTurn.is_timed());
        assert!(TurnPhase::Resolving.is_timed());
        assert!(TurnPhase::RoundReset.is_timed());
        assert!(!TurnPhase::OpponentTurn.is_timed());
        assert!(!TurnPhase::GameOver.is_timed());
    }

    #[test]
    fn test_display() {
        assert_eq!(TurnPhase::OpponentTurn.to_string(), "OpponentTurn");
    }
}
