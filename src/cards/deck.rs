//! Seeded, deterministic draw pile.
//!
//! The deck holds every card of the game. Its order is a pure function of
//! the seed: the unshuffled multiset is permuted by a [`GameRng`] built
//! from the seed, then cards are numbered 0..50 in the shuffled order.

use std::collections::VecDeque;

use tracing::debug;

use super::card::Card;
use super::color::Color;
use crate::core::GameRng;
use crate::error::{HanabiError, Result};

/// Copies of each value per color: three 1s, two each of 2-4, one 5.
pub const VALUE_DISTRIBUTION: [(u8, usize); 5] = [(1, 3), (2, 2), (3, 2), (4, 2), (5, 1)];

/// The draw pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Largest accepted seed.
    pub const MAX_SEED: u64 = 100;

    /// Build and shuffle a full deck from `seed`.
    ///
    /// Fails if the seed is above [`Deck::MAX_SEED`].
    pub fn new(seed: u64) -> Result<Self> {
        if seed > Self::MAX_SEED {
            return Err(HanabiError::InvalidSeed {
                seed,
                max: Self::MAX_SEED,
            });
        }

        let mut faces: Vec<(u8, Color)> = Color::ALL
            .iter()
            .flat_map(|&color| {
                VALUE_DISTRIBUTION
                    .iter()
                    .flat_map(move |&(value, copies)| std::iter::repeat((value, color)).take(copies))
            })
            .collect();

        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, (value, color))| Card::new(value, color, index as u8))
            .collect::<Result<VecDeque<_>>>()?;

        debug!(seed, cards = cards.len(), "deck shuffled");
        Ok(Self { cards })
    }

    /// Build a deck that draws `cards` in the given order.
    ///
    /// Intended for replays and scripted scenarios; no distribution checks
    /// are made.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(HanabiError::EmptyDeck)
    }
}
