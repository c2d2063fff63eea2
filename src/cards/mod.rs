//! Card system: values and in-deck instances.
//!
//! ## Key Types
//!
//! - `Element`: Fire, Water or Snow
//! - `Card`: Immutable element + power value
//! - `CardInstance`: A card bound to the `CardKey` its deck assigned

pub mod card;
pub mod instance;

pub use card::{Card, Element, MAX_POWER, MIN_POWER};
pub use instance::CardInstance;
