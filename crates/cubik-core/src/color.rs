//! Sticker colors and the palette that assigns them to outer faces.

use std::fmt;

use crate::direction::Direction;
use crate::error::PaletteError;

/// A sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// White.
    White,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Unstickered interior face.
    Neutral,
}

impl Color {
    /// Every color, in tag order.
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::Neutral,
    ];

    /// Stable numeric tag (position in [`Color::ALL`]).
    pub fn tag(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Yellow => 1,
            Color::Blue => 2,
            Color::Green => 3,
            Color::Red => 4,
            Color::Orange => 5,
            Color::Neutral => 6,
        }
    }

    /// Inverse of [`Color::tag`].
    pub fn from_tag(tag: u8) -> Option<Color> {
        Color::ALL.get(tag as usize).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// Assignment of one distinct, non-neutral color to each outer direction.
///
/// Colors are stored in [`Direction::ALL`] slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Color; 6],
}

impl Palette {
    /// Build a palette from colors given in [`Direction::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NeutralColor`] if any entry is
    /// [`Color::Neutral`] and [`PaletteError::DuplicateColor`] if two
    /// directions share a color.
    pub fn new(colors: [Color; 6]) -> Result<Self, PaletteError> {
        for (slot, &color) in colors.iter().enumerate() {
            if color == Color::Neutral {
                return Err(PaletteError::NeutralColor {
                    direction: Direction::ALL[slot],
                });
            }
            if colors[..slot].contains(&color) {
                return Err(PaletteError::DuplicateColor { color });
            }
        }
        Ok(Self { colors })
    }

    /// Color of outer stickers initially facing `direction`.
    pub fn color(&self, direction: Direction) -> Color {
        self.colors[direction.slot()]
    }

    /// The direction whose stickers carry `color`, if any.
    pub fn direction_of(&self, color: Color) -> Option<Direction> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .and_then(Direction::from_slot)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Color::White,
                Color::Yellow,
                Color::Blue,
                Color::Green,
                Color::Red,
                Color::Orange,
            ],
        }
    }
}
