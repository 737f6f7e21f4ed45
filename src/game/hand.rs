//! A player's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Cards held by one player, in the order they were drawn.
///
/// Only the game mutates hands; callers see them as slices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 5]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove `card`, keeping the order of the rest.
    ///
    /// Returns `None` (and leaves the hand untouched) if the card is not held.
    pub(crate) fn remove(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Sorted indexes of the held cards matching `pred`.
    pub fn indexes_where(&self, pred: impl Fn(&Card) -> bool) -> Vec<u8> {
        let mut indexes: Vec<u8> = self
            .cards
            .iter()
            .filter(|c| pred(c))
            .map(Card::index)
            .collect();
        indexes.sort_unstable();
        indexes
    }
}
