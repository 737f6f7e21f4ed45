//! The play area: one ascending run per color.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color, MAX_VALUE};

/// Successfully played cards, per color.
///
/// Each run is `1, 2, ..` with no gaps; the score is the total number of
/// cards on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    runs: [SmallVec<[Card; 5]>; Color::COUNT],
}

impl Board {
    /// Highest achievable score.
    pub const MAX_SCORE: usize = Color::COUNT * MAX_VALUE as usize;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value on top of `color`'s run, 0 if nothing was played.
    #[must_use]
    pub fn top(&self, color: Color) -> u8 {
        self.runs[color.index()].last().map_or(0, Card::value)
    }

    /// Whether `card` extends its color's run.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        card.value() == self.top(card.color()) + 1
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.accepts(&card), "{card} does not extend its run");
        self.runs[card.color().index()].push(card);
    }

    /// Cards played for `color`, lowest first.
    #[must_use]
    pub fn run(&self, color: Color) -> &[Card] {
        &self.runs[color.index()]
    }

    /// Iterate over every color and its run, in `Color::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[Card])> {
        Color::ALL.iter().map(move |&color| (color, self.run(color)))
    }

    #[must_use]
    pub fn is_complete(&self, color: Color) -> bool {
        self.top(color) == MAX_VALUE
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.runs.iter().map(|run| run.len()).sum()
    }
}
