//! RGBA colors and color-name resolution
//!
//! Colors are stored as 8-bit RGBA, the same layout the canvas uses for its
//! pixel buffer. Named colors follow the usual web/SDL values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque-by-default RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors understood by [`Color::from_name`]
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Resolve a color name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Name of this color, if it is one of the named colors
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, c)| c == self)
            .map(|(n, _)| *n)
    }

    /// Bytes in canvas pixel order
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 && digits.len() != 8 {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.a == 255 => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            None => write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a),
        }
    }
}

/// Error returned when a color string is neither a known name nor `#rrggbb[aa]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown color '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s)
            .or_else(|| Color::from_hex(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_names_resolve() {
        assert_eq!(Color::from_name("blue"), Some(Color::BLUE));
        assert_eq!(Color::from_name("green"), Some(Color::GREEN));
        assert_eq!(Color::from_name("red"), Some(Color::RED));
        assert_eq!(Color::from_name("yellow"), Some(Color::YELLOW));
        assert_eq!(Color::from_name("black"), Some(Color::BLACK));
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        assert_eq!(Color::from_name("  Red "), Some(Color::RED));
        assert_eq!(Color::from_name("magenta"), None);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert_eq!(
            "#10203040".parse::<Color>(),
            Ok(Color { r: 0x10, g: 0x20, b: 0x30, a: 0x40 })
        );
        assert!("#fff".parse::<Color>().is_err());
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_prefers_name() {
        assert_eq!(Color::YELLOW.to_string(), "yellow");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(Color::RED.to_rgba(), [255, 0, 0, 255]);
    }
}
