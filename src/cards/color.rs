//! The five card colors.

use serde::{Deserialize, Serialize};

/// A card color (suit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Color {
    /// Every color, in board order.
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    /// Number of colors in the game.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Green => 1,
            Color::Red => 2,
            Color::White => 3,
            Color::Yellow => 4,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::White => "White",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}
