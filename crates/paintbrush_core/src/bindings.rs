//! Key bindings for brush movement and color selection

use crate::color::Color;
use crate::key::Key;

/// A movement direction on screen (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis affected by a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Sign of the velocity this direction produces on its axis
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }
}

/// Keys that steer the brush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self {
            up: Key::Up,
            down: Key::Down,
            left: Key::Left,
            right: Key::Right,
        }
    }
}

impl MovementBindings {
    /// Direction bound to `key`, if any
    pub fn direction(&self, key: Key) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn contains(&self, key: Key) -> bool {
        self.direction(key).is_some()
    }

    pub fn keys(&self) -> [Key; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

/// Ordered key → color mapping
///
/// Lookup returns the first entry bound to a key, so a palette built with a
/// duplicate key keeps the earlier binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(Key, Color)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            (Key::Char('b'), Color::BLUE),
            (Key::Char('g'), Color::GREEN),
            (Key::Char('r'), Color::RED),
            (Key::Char('y'), Color::YELLOW),
            (Key::Space, Color::BLACK),
        ])
    }
}

impl Palette {
    pub fn new(entries: Vec<(Key, Color)>) -> Self {
        Self { entries }
    }

    /// Color bound to `key`, if any
    pub fn color_for(&self, key: Key) -> Option<Color> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.color_for(key).is_some()
    }

    /// Color at position `index` in palette order
    pub fn get(&self, index: usize) -> Option<Color> {
        self.entries.get(index).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Color)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_movement_bindings() {
        let bindings = MovementBindings::default();
        assert_eq!(bindings.direction(Key::Up), Some(Direction::Up));
        assert_eq!(bindings.direction(Key::Right), Some(Direction::Right));
        assert_eq!(bindings.direction(Key::Char('w')), None);
    }

    #[test]
    fn test_direction_axis_and_sign() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Up.sign(), -1);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.sign(), 1);
    }

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get(0), Some(Color::BLUE));
        assert_eq!(palette.get(2), Some(Color::RED));
        assert_eq!(palette.get(4), Some(Color::BLACK));
        assert_eq!(palette.color_for(Key::Space), Some(Color::BLACK));
        assert_eq!(palette.color_for(Key::Char('x')), None);
    }

    #[test]
    fn test_duplicate_palette_key_keeps_first() {
        let palette = Palette::new(vec![
            (Key::Char('c'), Color::BLUE),
            (Key::Char('c'), Color::RED),
        ]);
        assert_eq!(palette.color_for(Key::Char('c')), Some(Color::BLUE));
    }
}
