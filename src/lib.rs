//! # elemental-clash
//!
//! Round and deck engine for a two-player elemental card duel.
//!
//! Each side holds a deck of Fire, Water and Snow cards with a power from 1
//! to 10. Every round both sides draw, the player commits a card before the
//! turn clock runs out, the opponent commits a random card from its hand,
//! and the higher power scores. First to the winning score takes the match.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never sleeps or spawns. The host calls
//!    `submit_player_card` on input and `tick(delta)` once per frame.
//!
//! 2. **Deterministic**: All randomness flows from one `u64` seed through
//!    `GameRng`, with an independent stream per deck.
//!
//! 3. **Presentation-Free**: Cards are plain values. Rendering lives behind
//!    the `MatchObserver` trait and reads the event stream.
//!
//! ## Modules
//!
//! - `core`: Card keys, sides, RNG, configuration
//! - `cards`: Card values and in-deck instances
//! - `zones`: Pile tracking (draw pile, hand, discard)
//! - `deck`: One side's deck operations
//! - `rules`: Round comparison and results
//! - `events`: Match events, observers
//! - `game`: Match state and the round state machine
//!
//! ## Example
//!
//! ```
//! use elemental_clash::{MatchConfig, MatchController, TurnPhase};
//!
//! let mut game = MatchController::new(MatchConfig::default().instant(), 42).unwrap();
//!
//! while !game.is_over() {
//!     match game.player_hand().first() {
//!         Some(card) => {
//!             game.submit_player_card(card.key).unwrap();
//!         }
//!         None => game.tick(1.0),
//!     }
//!     if game.is_starved() {
//!         break;
//!     }
//! }
//!
//! if let Some(result) = game.result() {
//!     assert_eq!(game.phase(), TurnPhase::GameOver);
//!     assert_eq!(game.score(result.winner), 3);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod events;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardKey, Side, SideMap,
    GameRng,
    MatchConfig, TimeoutPolicy, STARTER_DECK,
};

pub use crate::cards::{Card, CardInstance, Element};

pub use crate::zones::{Pile, PileManager};

pub use crate::deck::{Deck, DrawReport};

pub use crate::rules::{resolve_round, GameResult, RoundOutcome};

pub use crate::events::{MatchEvent, MatchObserver};

pub use crate::game::{MatchBuilder, MatchController, MatchSnapshot, MatchState, Submission, TurnPhase};

pub use crate::error::{DeckSignal, MatchError, MatchResult};
