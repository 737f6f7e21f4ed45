//! What one player is allowed to see.
//!
//! A player sees every other hand in full but none of their own cards.
//! For their own hand they only know the deck indexes of the cards they
//! hold, plus whatever color or value hints have revealed about them.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::engine::Game;
use crate::cards::{Card, Color};
use crate::core::{Action, HintRecord, PlayerId};

/// One of the viewer's own cards, face hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenCard {
    /// Deck index, the card's identity.
    pub index: u8,
    /// Color revealed by a color hint.
    pub known_color: Option<Color>,
    /// Value revealed by a value hint.
    pub known_value: Option<u8>,
}

/// The game as seen by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub current_player: PlayerId,
    pub turn: u32,
    pub score: usize,
    pub life: u8,
    pub hint_budget: u8,
    pub deck_remaining: usize,
    pub countdown: usize,
    pub finished: bool,
    pub board: Board,
    pub discard: Vec<Card>,
    pub own_hand: Vec<HiddenCard>,
    /// Other players' hands in seat order.
    pub other_hands: Vec<(PlayerId, Vec<Card>)>,
    pub hint_history: Vec<HintRecord>,
}

impl Game {
    /// Build `viewer`'s view of the game, or `None` if there is no such seat.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> Option<PlayerView> {
        let own = self.hand(viewer)?;

        let mut own_hand: Vec<HiddenCard> = own
            .iter()
            .map(|card| HiddenCard {
                index: card.index(),
                known_color: None,
                known_value: None,
            })
            .collect();

        for record in self.hint_history().iter() {
            if record.action.hint_target() != Some(viewer) {
                continue;
            }
            for hidden in own_hand
                .iter_mut()
                .filter(|h| record.action.hint_indexes().contains(&h.index))
            {
                match &record.action {
                    Action::HintColor { color, .. } => hidden.known_color = Some(*color),
                    Action::HintValue { value, .. } => hidden.known_value = Some(*value),
                    Action::Discard(_) | Action::Play(_) => {}
                }
            }
        }

        let other_hands = viewer
            .others(self.player_count())
            .filter_map(|p| self.hand(p).map(|cards| (p, cards.to_vec())))
            .collect();

        Some(PlayerView {
            viewer,
            current_player: self.current_player(),
            turn: self.turn(),
            score: self.score(),
            life: self.life(),
            hint_budget: self.hint_budget(),
            deck_remaining: self.deck_remaining(),
            countdown: self.countdown(),
            finished: self.is_finished(),
            board: self.board().clone(),
            discard: self.discard().iter().copied().collect(),
            own_hand,
            other_hands,
            hint_history: self.hint_history().iter().cloned().collect(),
        })
    }
}
