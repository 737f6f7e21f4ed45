//! Legal action enumeration.
//!
//! Drivers and bots use these helpers instead of re-implementing the rules:
//! every action returned here is accepted by [`Game::submit_action`].

use super::engine::Game;
use crate::cards::{Color, MAX_VALUE, MIN_VALUE};
use crate::core::{Action, PlayerId};

impl Game {
    /// The exhaustive color hint for `target`, naming every card of `color`.
    ///
    /// Returns `None` if there is no such seat. The action may still be
    /// rejected if it is not a legal hint right now (no budget, self-hint).
    #[must_use]
    pub fn color_hint(&self, target: PlayerId, color: Color) -> Option<Action> {
        let hand = self.hands().get(target)?;
        let indexes = hand.indexes_where(|card| card.color() == color);
        Some(Action::hint_color(target, color, &indexes))
    }

    /// The exhaustive value hint for `target`, naming every card of `value`.
    #[must_use]
    pub fn value_hint(&self, target: PlayerId, value: u8) -> Option<Action> {
        let hand = self.hands().get(target)?;
        let indexes = hand.indexes_where(|card| card.value() == value);
        Some(Action::hint_value(target, value, &indexes))
    }

    /// Every action the current player may submit.
    ///
    /// Plays and discards for each held card, then (if a hint token is
    /// available) one color hint per color and one value hint per value
    /// for each other player. Empty once the game is finished.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_finished() {
            return Vec::new();
        }

        let player = self.current_player();
        let mut actions = Vec::new();

        for &card in self.hand(player).unwrap_or_default() {
            actions.push(Action::Play(card));
            actions.push(Action::Discard(card));
        }

        if self.hint_budget() > 0 {
            for target in player.others(self.player_count()) {
                actions.extend(Color::ALL.iter().filter_map(|&color| self.color_hint(target, color)));
                actions.extend((MIN_VALUE..=MAX_VALUE).filter_map(|value| self.value_hint(target, value)));
            }
        }

        actions
    }
}
