//! Platform-neutral key identifiers
//!
//! The brush never sees platform key codes. Input backends translate their
//! own encoding into [`Key`], and bindings are expressed in terms of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Enter,
    /// A printable key, stored lowercase
    Char(char),
}

impl Key {
    /// Create a character key (letters are normalized to lowercase)
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Space => f.write_str("space"),
            Key::Escape => f.write_str("escape"),
            Key::Enter => f.write_str("enter"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown key '{}'", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A lone space is the space key, not whitespace to trim
        if s == " " {
            return Ok(Key::Space);
        }
        let name = s.trim().to_ascii_lowercase();
        let key = match name.as_str() {
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "space" => Key::Space,
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_whitespace() => Key::char(c),
                    _ => return Err(ParseKeyError(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl TryFrom<String> for Key {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!("up".parse::<Key>(), Ok(Key::Up));
        assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::Left));
        assert_eq!("space".parse::<Key>(), Ok(Key::Space));
        assert_eq!(" ".parse::<Key>(), Ok(Key::Space));
        assert_eq!("Esc".parse::<Key>(), Ok(Key::Escape));
    }

    #[test]
    fn test_char_keys_are_lowercase() {
        assert_eq!("B".parse::<Key>(), Ok(Key::Char('b')));
        assert_eq!(Key::char('Y'), Key::Char('y'));
    }

    #[test]
    fn test_invalid_keys() {
        assert!("".parse::<Key>().is_err());
        assert!("shift-b".parse::<Key>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for key in [Key::Up, Key::Space, Key::Escape, Key::Char('g')] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }
}
