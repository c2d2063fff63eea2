//! Core types: card keys, sides, RNG, configuration.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::CardKey;
pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{starter_cards, MatchConfig, TimeoutPolicy, DEFAULT_HISTORY_LIMIT, STARTER_DECK};
