//! The fixed color palette.

use crate::error::{InvalidConfiguration, Result};

/// A selectable peg color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Gray,
    LightGray,
}

/// Every color, in stable enumeration order.
pub const PALETTE: [Color; 10] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::White,
    Color::Black,
    Color::Gray,
    Color::LightGray,
];

impl Color {
    /// Single-letter notation used on the command line.
    pub fn to_letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Cyan => 'C',
            Color::Magenta => 'M',
            Color::White => 'W',
            Color::Black => 'K',
            Color::Gray => 'A',
            Color::LightGray => 'L',
        }
    }

    /// Parse from a letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|color| color.to_letter() == c.to_ascii_uppercase())
    }

    pub fn parse(c: char) -> Result<Self> {
        Self::from_letter(c).ok_or(InvalidConfiguration::UnknownColor(c))
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::White => "white",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::LightGray => "light-gray",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
