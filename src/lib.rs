//! # hanabi-engine
//!
//! A rules engine for cooperative Hanabi-style card games.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A deck is a pure function of its seed. Replaying
//!    the same actions on the same seed gives the same game.
//!
//! 2. **Single mutation path**: `Game::submit_action` is the only way to
//!    change a game. It validates fully before mutating, so a rejected
//!    action changes nothing.
//!
//! 3. **Private information**: The game owns every hand. Callers get
//!    read-only slices, or a `PlayerView` that hides the viewer's own cards.
//!
//! ## Example
//!
//! ```
//! use hanabi_engine::{Action, Deck, Game};
//!
//! let deck = Deck::new(42).unwrap();
//! let mut game = Game::new(2, deck).unwrap();
//!
//! let final_score = loop {
//!     let player = game.current_player();
//!     let card = game.hand(player).unwrap()[0];
//!     if let Some(score) = game.submit_action(Action::Discard(card)).unwrap() {
//!         break score;
//!     }
//! };
//! assert_eq!(final_score, 0);
//! assert!(game.is_finished());
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, actions, RNG, rules configuration
//! - `cards`: Colors, cards, the seeded deck
//! - `game`: The game state machine, hands, board, player views
//! - `error`: Error type and result alias

pub mod cards;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Deck};
pub use crate::core::{Action, GameRng, HintRecord, PlayerId, RulesConfig};
pub use crate::error::{ErrorKind, HanabiError, Result};
pub use crate::game::{Board, Game, HiddenCard, PlayerView};
