//! Match events and observers.
//!
//! The controller describes every change as a `MatchEvent`. Events are
//! kept in the match journal (an `im::Vector`, cheap to snapshot) and pushed
//! to each `MatchObserver` as they happen.

pub mod event;
pub mod observer;

pub use event::MatchEvent;
pub use observer::{notify, MatchObserver};
