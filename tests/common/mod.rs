//! Shared helpers for integration tests.

#![allow(dead_code)]

use hanabi_engine::{Card, Color, Deck, Game};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Deck drawing `(value, color, index)` cards in the given order.
pub fn stacked_deck(cards: &[(u8, Color, u8)]) -> Deck {
    Deck::from_cards(
        cards
            .iter()
            .map(|&(value, color, index)| Card::new(value, color, index).unwrap()),
    )
}

/// Deck drawing `(value, color)` faces in order, indexed from 0.
pub fn stacked_faces(faces: &[(u8, Color)]) -> Deck {
    Deck::from_cards(
        faces
            .iter()
            .enumerate()
            .map(|(i, &(value, color))| Card::new(value, color, i as u8).unwrap()),
    )
}

/// `count` white 2s: never playable on an empty board, never hinted by accident.
pub fn filler(count: usize) -> Vec<(u8, Color)> {
    vec![(2, Color::White); count]
}

/// Everything a rejected action must leave untouched.
#[derive(Debug, PartialEq, Eq)]
pub struct Fingerprint {
    pub turn: u32,
    pub life: u8,
    pub hint_budget: u8,
    pub score: usize,
    pub countdown: usize,
    pub deck_remaining: usize,
    pub discard: Vec<Card>,
    pub hands: Vec<Vec<Card>>,
    pub hints: usize,
}

pub fn fingerprint(game: &Game) -> Fingerprint {
    Fingerprint {
        turn: game.turn(),
        life: game.life(),
        hint_budget: game.hint_budget(),
        score: game.score(),
        countdown: game.countdown(),
        deck_remaining: game.deck_remaining(),
        discard: game.discard().iter().copied().collect(),
        hands: hanabi_engine::PlayerId::all(game.player_count())
            .map(|p| game.hand(p).unwrap().to_vec())
            .collect(),
        hints: game.hint_history().len(),
    }
}

/// Total cards accounted for across hands, board, discard and deck.
pub fn cards_in_play(game: &Game) -> usize {
    let in_hands: usize = hanabi_engine::PlayerId::all(game.player_count())
        .map(|p| game.hand(p).unwrap().len())
        .sum();
    in_hands + game.score() + game.discard().len() + game.deck_remaining()
}
