//! Card data model: colors, cards, and the seeded deck.
//!
//! ## Key Types
//!
//! - `Color`: One of the five suits
//! - `Card`: Value 1-5, color, and a unique deck index
//! - `Deck`: Deterministic draw pile built from a seed

pub mod card;
pub mod color;
pub mod deck;

pub use card::{is_valid_value, Card, DECK_SIZE, MAX_VALUE, MIN_VALUE};
pub use color::Color;
pub use deck::{Deck, VALUE_DISTRIBUTION};
