//! The game state machine.
//!
//! A `Game` owns the deck, every hand, the board, the discard pile and the
//! hint history. The only way to change any of them is
//! [`Game::submit_action`], which validates the action completely before
//! touching state, so a rejected action leaves the game exactly as it was.
//!
//! ## End of game
//!
//! Once the deck runs out, every submitted action (including the one that
//! drew the last card) counts down from `player_count + 1`. The action that
//! brings the countdown to zero returns the final score and the game is
//! finished; it does not advance the turn.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::board::Board;
use super::hand::Hand;
use crate::cards::{is_valid_value, Card, Deck, MAX_VALUE};
use crate::core::{Action, HintRecord, PlayerId, PlayerMap, RulesConfig};
use crate::error::{HanabiError, Result};

/// A single match.
///
/// Cloning is cheap: the discard pile and hint history are persistent
/// vectors, so a clone can be used for what-if exploration.
#[derive(Clone, Debug)]
pub struct Game {
    config: RulesConfig,
    deck: Deck,
    hands: PlayerMap<Hand>,
    board: Board,
    discard: Vector<Card>,
    hint_history: Vector<HintRecord>,
    turn: u32,
    life: u8,
    hint_budget: u8,
    countdown: usize,
}

impl Game {
    /// Start a game with the standard rules.
    ///
    /// Fails if `player_count` is not 2 to 5.
    pub fn new(player_count: usize, deck: Deck) -> Result<Self> {
        Self::with_config(player_count, deck, RulesConfig::default())
    }

    /// Start a game with custom rules.
    ///
    /// Hands are dealt in draw order, player 0 receiving all of their
    /// cards before player 1.
    pub fn with_config(player_count: usize, mut deck: Deck, config: RulesConfig) -> Result<Self> {
        config.validate()?;
        let hand_size = config.hand_size(player_count)?;

        let mut hands = PlayerMap::new(player_count, |_| Hand::new());
        for player in PlayerId::all(player_count) {
            for _ in 0..hand_size {
                let card = deck.draw()?;
                hands[player].push(card);
            }
        }

        debug!(
            player_count,
            hand_size,
            deck_remaining = deck.remaining(),
            "hands dealt"
        );

        Ok(Self {
            life: config.starting_life,
            hint_budget: config.max_hints,
            countdown: player_count + 1,
            config,
            deck,
            hands,
            board: Board::new(),
            discard: Vector::new(),
            hint_history: Vector::new(),
            turn: 0,
        })
    }

    // === Observers ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Turns completed so far (starts at 0).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player expected to act next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn, self.player_count())
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.board.score()
    }

    #[must_use]
    pub fn life(&self) -> u8 {
        self.life
    }

    #[must_use]
    pub fn hint_budget(&self) -> u8 {
        self.hint_budget
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Discarded and misplayed cards, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Cards held by `player`, or `None` if there is no such seat.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(player).map(Hand::cards)
    }

    /// Every hint given so far, oldest first.
    #[must_use]
    pub fn hint_history(&self) -> &Vector<HintRecord> {
        &self.hint_history
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Actions left before the game ends. Only decreases once the deck is empty.
    #[must_use]
    pub fn countdown(&self) -> usize {
        self.countdown
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.countdown == 0
    }

    pub(crate) fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    // === Turn processing ===

    /// Apply the current player's action.
    ///
    /// Returns `Some(score)` when this action ends the game, `None` while
    /// it continues. Errors leave the game unchanged.
    pub fn submit_action(&mut self, action: Action) -> Result<Option<usize>> {
        if self.is_finished() {
            return Err(HanabiError::GameFinished);
        }

        let player = self.current_player();
        if let Err(err) = self.apply(player, &action) {
            debug!(turn = self.turn, %player, %action, %err, "action rejected");
            return Err(err);
        }
        debug!(turn = self.turn, %player, %action, "action applied");

        if self.deck.is_empty() {
            self.countdown -= 1;
            if self.countdown == 0 {
                let score = self.score();
                info!(turn = self.turn, score, life = self.life, "game finished");
                return Ok(Some(score));
            }
        }

        self.turn += 1;
        Ok(None)
    }

    fn apply(&mut self, player: PlayerId, action: &Action) -> Result<()> {
        match action {
            Action::Discard(card) => {
                self.take_from_hand(player, card)?;
                self.discard.push_back(*card);
                self.refill(player)?;
                if self.hint_budget < self.config.max_hints {
                    self.hint_budget += 1;
                }
            }
            Action::Play(card) => {
                self.take_from_hand(player, card)?;
                if self.board.accepts(card) {
                    self.board.push(*card);
                    if card.value() == MAX_VALUE {
                        self.regain_completion_hint();
                    }
                } else {
                    self.discard.push_back(*card);
                    self.life = self.life.saturating_sub(1);
                }
                self.refill(player)?;
            }
            Action::HintColor { player: target, .. } | Action::HintValue { player: target, .. } => {
                self.validate_hint(player, *target, action)?;
                self.hint_budget -= 1;
                self.hint_history
                    .push_back(HintRecord::new(player, action.clone(), self.turn));
            }
        }
        Ok(())
    }

    /// Ownership check for plays and discards.
    fn take_from_hand(&mut self, player: PlayerId, card: &Card) -> Result<Card> {
        self.hands[player]
            .remove(card)
            .ok_or(HanabiError::CardNotInHand {
                card: *card,
                player,
            })
    }

    fn refill(&mut self, player: PlayerId) -> Result<()> {
        if !self.deck.is_empty() {
            let card = self.deck.draw()?;
            self.hands[player].push(card);
        }
        Ok(())
    }

    fn regain_completion_hint(&mut self) {
        if self.config.cap_hint_on_completion && self.hint_budget >= self.config.max_hints {
            return;
        }
        self.hint_budget = self.hint_budget.saturating_add(1);
    }

    fn validate_hint(&self, giver: PlayerId, target: PlayerId, action: &Action) -> Result<()> {
        if self.hint_budget == 0 {
            return Err(HanabiError::NoHintLeft);
        }
        if target == giver || !target.is_seated(self.player_count()) {
            return Err(HanabiError::InvalidHintTarget { giver, target });
        }
        if let Action::HintValue { value, .. } = action {
            if !is_valid_value(*value) {
                return Err(HanabiError::InvalidHintValue(*value));
            }
        }

        let expected: FxHashSet<u8> = self.hands[target]
            .cards()
            .iter()
            .filter(|card| action.touches(card))
            .map(Card::index)
            .collect();
        let declared: FxHashSet<u8> = action.hint_indexes().iter().copied().collect();

        if declared != expected {
            return Err(HanabiError::HintMismatch {
                declared: sorted(declared),
                expected: sorted(expected),
            });
        }
        Ok(())
    }
}

fn sorted(indexes: FxHashSet<u8>) -> Vec<u8> {
    let mut out: Vec<u8> = indexes.into_iter().collect();
    out.sort_unstable();
    out
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn : {} | Score : {}", self.turn, self.score())?;
        write!(f, "Life : {} | Hint: {}", self.life, self.hint_budget)
    }
}
