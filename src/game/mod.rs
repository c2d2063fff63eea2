//! The match: phases, state and the controller that drives rounds.
//!
//! A match is a loop of rounds. Each round both sides draw, the player
//! commits a card (or runs out of time), the opponent commits a random card
//! from its hand, the higher power scores a point, and the center is
//! cleared. The first side to the winning score ends the match.

pub mod controller;
pub mod phase;
pub mod state;

pub use controller::{MatchBuilder, MatchController, MatchSnapshot, Submission, TIME_EPSILON};
pub use phase::TurnPhase;
pub use state::MatchState;
