//! Card value type.
//!
//! A card is a value (1-5), a color, and an index that identifies it
//! uniquely within the deck. Game logic only looks at value and color; the
//! index is how hints name the cards they point at.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::{HanabiError, Result};

/// Lowest card value.
pub const MIN_VALUE: u8 = 1;

/// Highest card value. Playing it completes a color.
pub const MAX_VALUE: u8 = 5;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 50;

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    value: u8,
    color: Color,
    index: u8,
}

impl Card {
    /// Create a card, validating value and index ranges.
    pub fn new(value: u8, color: Color, index: u8) -> Result<Self> {
        if !is_valid_value(value) {
            return Err(HanabiError::InvalidCardValue(value));
        }
        if usize::from(index) >= DECK_SIZE {
            return Err(HanabiError::InvalidCardIndex(index));
        }
        Ok(Self { value, color, index })
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Unique deck index (0..50).
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }
}

/// Check whether `value` is a card value that exists.
#[must_use]
pub fn is_valid_value(value: u8) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.color)
    }
}

/// Unvalidated wire form, checked through `Card::new` on deserialize.
#[derive(Deserialize)]
struct RawCard {
    value: u8,
    color: Color,
    index: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = HanabiError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.value, raw.color, raw.index)
    }
}
