//! Error types for the rules engine.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Broad category of a [`HanabiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad construction parameters or an illegal action from the caller.
    InvalidArgument,
    /// Drawing from a deck with no cards left.
    EmptyDeck,
    /// The game has already finished.
    IllegalState,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HanabiError {
    #[error("Invalid seed {seed}: must be in 0..={max}")]
    InvalidSeed { seed: u64, max: u64 },

    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(usize),

    #[error("Invalid card value {0}: must be in 1..=5")]
    InvalidCardValue(u8),

    #[error("Invalid card index {0}: must be below 50")]
    InvalidCardIndex(u8),

    #[error("Invalid rules configuration: {0}")]
    InvalidConfig(String),

    #[error("Deck is empty")]
    EmptyDeck,

    #[error("Card {card} is not in the hand of {player}")]
    CardNotInHand { card: Card, player: PlayerId },

    #[error("No hint left")]
    NoHintLeft,

    #[error("{giver} cannot give a hint to {target}")]
    InvalidHintTarget { giver: PlayerId, target: PlayerId },

    #[error("Invalid hint value {0}: must be in 1..=5")]
    InvalidHintValue(u8),

    #[error("Hint must name exactly the matching cards: declared {declared:?}, matching {expected:?}")]
    HintMismatch { declared: Vec<u8>, expected: Vec<u8> },

    #[error("Game is finished")]
    GameFinished,
}

impl HanabiError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            HanabiError::EmptyDeck => ErrorKind::EmptyDeck,
            HanabiError::GameFinished => ErrorKind::IllegalState,
            HanabiError::InvalidSeed { .. }
            | HanabiError::InvalidPlayerCount(_)
            | HanabiError::InvalidCardValue(_)
            | HanabiError::InvalidCardIndex(_)
            | HanabiError::InvalidConfig(_)
            | HanabiError::CardNotInHand { .. }
            | HanabiError::NoHintLeft
            | HanabiError::InvalidHintTarget { .. }
            | HanabiError::InvalidHintValue(_)
            | HanabiError::HintMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, HanabiError>;
