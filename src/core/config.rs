//! Rules configuration.
//!
//! `RulesConfig::default()` is the standard game: 8 hint tokens, 3 lives,
//! five cards per hand for 2-3 players and four for 4-5 players. Hosts may
//! load a different configuration (it is serde-serializable) and pass it to
//! `Game::with_config`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::{HanabiError, Result};

/// Tunable game rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Hint tokens at the start of the game, and the cap for discards.
    pub max_hints: u8,

    /// Lives at the start of the game.
    pub starting_life: u8,

    /// Cards dealt per player, keyed by player count.
    /// Player counts without an entry are not playable.
    pub hand_sizes: BTreeMap<usize, usize>,

    /// Cap the hint token regained by completing a color at `max_hints`.
    ///
    /// Off by default: completing a color always grants a token, even
    /// above the maximum.
    pub cap_hint_on_completion: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hints: 8,
            starting_life: 3,
            hand_sizes: BTreeMap::from([(2, 5), (3, 5), (4, 4), (5, 4)]),
            cap_hint_on_completion: false,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_max_hints(mut self, max_hints: u8) -> Self {
        self.max_hints = max_hints;
        self
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: u8) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the hand size for a player count, making it playable.
    #[must_use]
    pub fn with_hand_size(mut self, player_count: usize, cards: usize) -> Self {
        self.hand_sizes.insert(player_count, cards);
        self
    }

    #[must_use]
    pub fn with_capped_completion_hint(mut self, capped: bool) -> Self {
        self.cap_hint_on_completion = capped;
        self
    }

    /// Cards per hand for `player_count` players.
    pub fn hand_size(&self, player_count: usize) -> Result<usize> {
        self.hand_sizes
            .get(&player_count)
            .copied()
            .ok_or(HanabiError::InvalidPlayerCount(player_count))
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.max_hints == 0 {
            return Err(HanabiError::InvalidConfig("max_hints must be positive".into()));
        }
        if self.starting_life == 0 {
            return Err(HanabiError::InvalidConfig("starting_life must be positive".into()));
        }
        if self.hand_sizes.is_empty() {
            return Err(HanabiError::InvalidConfig("no player count is playable".into()));
        }
        for (&players, &cards) in &self.hand_sizes {
            if players < 2 || players > usize::from(u8::MAX) {
                return Err(HanabiError::InvalidConfig(format!(
                    "unsupported player count {players}"
                )));
            }
            if cards == 0 {
                return Err(HanabiError::InvalidConfig(format!(
                    "hand size for {players} players must be positive"
                )));
            }
            if players * cards > DECK_SIZE {
                return Err(HanabiError::InvalidConfig(format!(
                    "dealing {cards} cards to {players} players needs more than {DECK_SIZE} cards"
                )));
            }
        }
        Ok(())
    }
}
