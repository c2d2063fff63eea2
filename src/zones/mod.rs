//! Pile system for card locations.
//!
//! ## Key Types
//!
//! - `Pile`: Draw pile, hand or discard
//! - `PileManager`: Card location tracking and movement for one deck

pub mod manager;

pub use manager::{Pile, PileManager};
