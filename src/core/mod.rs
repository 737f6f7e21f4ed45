//! Core engine types: players, actions, RNG, configuration.
//!
//! These are the building blocks the `game` module is assembled from.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, HintIndexes, HintRecord};
pub use config::RulesConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
