//! Player actions.
//!
//! Each turn the active player submits exactly one `Action`:
//! - hint a color to another player, naming every card of that color
//! - hint a value to another player, naming every card of that value
//! - discard a held card
//! - play a held card onto the board
//!
//! Hints name cards by their unique deck index (`Card::index`), so the
//! declared list is a set of card identities rather than hand positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, Color};

/// Card indexes named by a hint.
/// SmallVec holds a full hand (at most 5 cards) without heap allocation.
pub type HintIndexes = SmallVec<[u8; 5]>;

/// A complete player move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Tell `player` which of their cards have `color`.
    HintColor {
        player: PlayerId,
        color: Color,
        indexes: HintIndexes,
    },
    /// Tell `player` which of their cards have `value`.
    HintValue {
        player: PlayerId,
        value: u8,
        indexes: HintIndexes,
    },
    /// Discard a card from the acting player's hand.
    Discard(Card),
    /// Play a card from the acting player's hand.
    Play(Card),
}

impl Action {
    /// Create a color hint.
    #[must_use]
    pub fn hint_color(player: PlayerId, color: Color, indexes: &[u8]) -> Self {
        Action::HintColor {
            player,
            color,
            indexes: SmallVec::from_slice(indexes),
        }
    }

    /// Create a value hint.
    #[must_use]
    pub fn hint_value(player: PlayerId, value: u8, indexes: &[u8]) -> Self {
        Action::HintValue {
            player,
            value,
            indexes: SmallVec::from_slice(indexes),
        }
    }

    #[must_use]
    pub fn is_hint(&self) -> bool {
        matches!(self, Action::HintColor { .. } | Action::HintValue { .. })
    }

    /// The player receiving a hint, `None` for plays and discards.
    #[must_use]
    pub fn hint_target(&self) -> Option<PlayerId> {
        match self {
            Action::HintColor { player, .. } | Action::HintValue { player, .. } => Some(*player),
            Action::Discard(_) | Action::Play(_) => None,
        }
    }

    /// Indexes declared by a hint, empty for plays and discards.
    #[must_use]
    pub fn hint_indexes(&self) -> &[u8] {
        match self {
            Action::HintColor { indexes, .. } | Action::HintValue { indexes, .. } => indexes,
            Action::Discard(_) | Action::Play(_) => &[],
        }
    }

    /// Whether a hint's attribute applies to `card`.
    ///
    /// Always false for plays and discards.
    #[must_use]
    pub fn touches(&self, card: &Card) -> bool {
        match self {
            Action::HintColor { color, .. } => card.color() == *color,
            Action::HintValue { value, .. } => card.value() == *value,
            Action::Discard(_) | Action::Play(_) => false,
        }
    }

    /// The card acted on by a play or discard.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Discard(card) | Action::Play(card) => Some(*card),
            Action::HintColor { .. } | Action::HintValue { .. } => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::HintColor {
                player,
                color,
                indexes,
            } => write!(f, "{player}=>{color} {:?}", indexes.as_slice()),
            Action::HintValue {
                player,
                value,
                indexes,
            } => write!(f, "{player}=>{value} {:?}", indexes.as_slice()),
            Action::Discard(card) => write!(f, "Discard {card}"),
            Action::Play(card) => write!(f, "Play {card}"),
        }
    }
}

/// A hint that was given, with the turn it was given on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRecord {
    /// The player who gave the hint.
    pub giver: PlayerId,

    /// The hint action.
    pub action: Action,

    /// Turn number when the hint was given.
    pub turn: u32,
}

impl HintRecord {
    #[must_use]
    pub fn new(giver: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            giver,
            action,
            turn,
        }
    }
}
