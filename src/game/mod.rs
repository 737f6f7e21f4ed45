//! The rules engine: game state machine, hands, board, and player views.
//!
//! ## Key Types
//!
//! - `Game`: Turn order, validation, scoring and end-of-game countdown
//! - `Hand`: One player's held cards
//! - `Board`: Per-color runs of played cards
//! - `PlayerView`: What a single player may see

pub mod board;
pub mod engine;
pub mod hand;
pub mod legal;
pub mod view;

pub use board::Board;
pub use engine::Game;
pub use hand::Hand;
pub use view::{HiddenCard, PlayerView};
