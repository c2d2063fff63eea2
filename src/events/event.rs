//! Match event types.
//!
//! Every state change the controller makes is described by one
//! `MatchEvent`. Events are appended to the match journal and handed to
//! every subscribed observer, in the order the changes happen.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::Side;
use crate::error::DeckSignal;
use crate::game::TurnPhase;
use crate::rules::RoundOutcome;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Decks are built and shuffled.
    MatchStarted { seed: u64 },

    /// The state machine moved between phases.
    PhaseChanged { from: TurnPhase, to: TurnPhase },

    /// A new player turn began.
    RoundStarted { round: u32 },

    /// A card moved from a draw pile into a hand.
    CardDrawn { side: Side, card: CardInstance },

    /// The player turn clock advanced.
    TimerTick { remaining: f32 },

    /// The player turn clock reached zero with nothing submitted.
    TurnTimedOut,

    /// A side put a card in the center.
    CardCommitted { side: Side, card: CardInstance },

    /// A recoverable shortage.
    Signal(DeckSignal),

    /// Both commitments were compared.
    RoundResolved {
        player_card: Option<CardInstance>,
        opponent_card: Option<CardInstance>,
        outcome: RoundOutcome,
    },

    /// Scores after a resolution.
    ScoreChanged { player: u32, opponent: u32 },

    /// The center was cleared for the next round.
    RoundCleared,

    /// A side reached the winning score.
    GameOver { winner: Side },
}

impl MatchEvent {
    /// Short name for filtering and display.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            MatchEvent::MatchStarted { .. } => "match_started",
            MatchEvent::PhaseChanged { .. } => "phase_changed",
            MatchEvent::RoundStarted { .. } => "round_started",
            MatchEvent::CardDrawn { .. } => "card_drawn",
            MatchEvent::TimerTick { .. } => "timer_tick",
            MatchEvent::TurnTimedOut => "turn_timed_out",
            MatchEvent::CardCommitted { .. } => "card_committed",
            MatchEvent::Signal(_) => "signal",
            MatchEvent::RoundResolved { .. } => "round_resolved",
            MatchEvent::ScoreChanged { .. } => "score_changed",
            MatchEvent::RoundCleared => "round_cleared",
            MatchEvent::GameOver { .. } => "game_over",
        }
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::MatchStarted { seed } => write!(f, "match started (seed {})", seed),
            MatchEvent::PhaseChanged { from, to } => write!(f, "{} -> {}", from, to),
            MatchEvent::RoundStarted { round } => write!(f, "round {} started", round),
            MatchEvent::CardDrawn { side, card } => write!(f, "{} drew {}", side, card),
            MatchEvent::TimerTick { remaining } => write!(f, "{:.2}s remaining", remaining),
            MatchEvent::TurnTimedOut => write!(f, "Player did not play a card in time"),
            MatchEvent::CardCommitted { side, card } => write!(f, "{} played {}", side, card),
            MatchEvent::Signal(signal) => write!(f, "{}", signal),
            MatchEvent::RoundResolved { outcome, .. } => write!(f, "{}", outcome),
            MatchEvent::ScoreChanged { player, opponent } => {
                write!(f, "Player Score: {} / Opponent Score: {}", player, opponent)
            }
            MatchEvent::RoundCleared => write!(f, "round cleared"),
            MatchEvent::GameOver { winner } => write!(f, "{} Wins the Game!", winner),
        }
    }
}
