//! Mapping from winit events to paintbrush events
//!
//! Keys are read from the physical key code so bindings do not depend on
//! the keyboard layout. Window close and the opt-in quit key both become
//! [`Event::Quit`].

use paintbrush_core::Key;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::event::Event;

/// Translates raw winit input into [`Event`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapper {
    quit_key: Option<Key>,
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMapper {
    /// Mapper with no quit key: only closing the window quits
    pub fn new() -> Self {
        Self { quit_key: None }
    }

    /// Builder: set or clear the key that closes the program
    pub fn with_quit_key(mut self, key: Option<Key>) -> Self {
        self.quit_key = key;
        self
    }

    /// Map a window event
    ///
    /// Returns `None` for events the session does not care about.
    pub fn map_window_event(&self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::CloseRequested => Some(Event::Quit),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.map_key(code, event.state, event.repeat),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Map a key transition
    pub fn map_key(&self, code: KeyCode, state: ElementState, repeat: bool) -> Option<Event> {
        // OS auto-repeat would re-send presses for a held key
        if repeat {
            return None;
        }
        let key = Self::map_key_code(code)?;

        match state {
            ElementState::Pressed if Some(key) == self.quit_key => Some(Event::Quit),
            ElementState::Pressed => Some(Event::KeyDown(key)),
            ElementState::Released => Some(Event::KeyUp(key)),
        }
    }

    /// Translate a physical key code into a [`Key`]
    pub fn map_key_code(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::Space => Key::Space,
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::KeyA => Key::Char('a'),
            KeyCode::KeyB => Key::Char('b'),
            KeyCode::KeyC => Key::Char('c'),
            KeyCode::KeyD => Key::Char('d'),
            KeyCode::KeyE => Key::Char('e'),
            KeyCode::KeyF => Key::Char('f'),
            KeyCode::KeyG => Key::Char('g'),
            KeyCode::KeyH => Key::Char('h'),
            KeyCode::KeyI => Key::Char('i'),
            KeyCode::KeyJ => Key::Char('j'),
            KeyCode::KeyK => Key::Char('k'),
            KeyCode::KeyL => Key::Char('l'),
            KeyCode::KeyM => Key::Char('m'),
            KeyCode::KeyN => Key::Char('n'),
            KeyCode::KeyO => Key::Char('o'),
            KeyCode::KeyP => Key::Char('p'),
            KeyCode::KeyQ => Key::Char('q'),
            KeyCode::KeyR => Key::Char('r'),
            KeyCode::KeyS => Key::Char('s'),
            KeyCode::KeyT => Key::Char('t'),
            KeyCode::KeyU => Key::Char('u'),
            KeyCode::KeyV => Key::Char('v'),
            KeyCode::KeyW => Key::Char('w'),
            KeyCode::KeyX => Key::Char('x'),
            KeyCode::KeyY => Key::Char('y'),
            KeyCode::KeyZ => Key::Char('z'),
            KeyCode::Digit0 => Key::Char('0'),
            KeyCode::Digit1 => Key::Char('1'),
            KeyCode::Digit2 => Key::Char('2'),
            KeyCode::Digit3 => Key::Char('3'),
            KeyCode::Digit4 => Key::Char('4'),
            KeyCode::Digit5 => Key::Char('5'),
            KeyCode::Digit6 => Key::Char('6'),
            KeyCode::Digit7 => Key::Char('7'),
            KeyCode::Digit8 => Key::Char('8'),
            KeyCode::Digit9 => Key::Char('9'),
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(KeyMapper::map_key_code(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(KeyMapper::map_key_code(KeyCode::ArrowDown), Some(Key::Down));
        assert_eq!(KeyMapper::map_key_code(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(KeyMapper::map_key_code(KeyCode::ArrowRight), Some(Key::Right));
    }

    #[test]
    fn test_palette_keys() {
        for (code, c) in [
            (KeyCode::KeyB, 'b'),
            (KeyCode::KeyG, 'g'),
            (KeyCode::KeyR, 'r'),
            (KeyCode::KeyY, 'y'),
        ] {
            assert_eq!(KeyMapper::map_key_code(code), Some(Key::Char(c)));
        }
        assert_eq!(KeyMapper::map_key_code(KeyCode::Space), Some(Key::Space));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(KeyMapper::map_key_code(KeyCode::F5), None);
        assert_eq!(
            KeyMapper::new().map_key(KeyCode::ShiftLeft, ElementState::Pressed, false),
            None
        );
    }

    #[test]
    fn test_press_and_release() {
        let mapper = KeyMapper::new();
        assert_eq!(
            mapper.map_key(KeyCode::ArrowRight, ElementState::Pressed, false),
            Some(Event::KeyDown(Key::Right))
        );
        assert_eq!(
            mapper.map_key(KeyCode::ArrowRight, ElementState::Released, false),
            Some(Event::KeyUp(Key::Right))
        );
    }

    #[test]
    fn test_repeat_ignored() {
        let mapper = KeyMapper::new();
        assert_eq!(mapper.map_key(KeyCode::ArrowRight, ElementState::Pressed, true), None);
    }

    #[test]
    fn test_escape_is_plain_key_by_default() {
        let mapper = KeyMapper::default();
        assert_eq!(
            mapper.map_key(KeyCode::Escape, ElementState::Pressed, false),
            Some(Event::KeyDown(Key::Escape))
        );
    }

    #[test]
    fn test_configured_quit_key_quits() {
        let mapper = KeyMapper::new().with_quit_key(Some(Key::Escape));
        assert_eq!(
            mapper.map_key(KeyCode::Escape, ElementState::Pressed, false),
            Some(Event::Quit)
        );
        // Release of the quit key is just a key-up
        assert_eq!(
            mapper.map_key(KeyCode::Escape, ElementState::Released, false),
            Some(Event::KeyUp(Key::Escape))
        );
    }

    #[test]
    fn test_quit_key_cleared() {
        let mapper = KeyMapper::new()
            .with_quit_key(Some(Key::Char('q')))
            .with_quit_key(None);
        assert_eq!(
            mapper.map_key(KeyCode::KeyQ, ElementState::Pressed, false),
            Some(Event::KeyDown(Key::Char('q')))
        );
    }

    #[test]
    fn test_close_requested_quits() {
        let mapper = KeyMapper::new();
        assert_eq!(mapper.map_window_event(&WindowEvent::CloseRequested), Some(Event::Quit));
        assert_eq!(mapper.map_window_event(&WindowEvent::Focused(true)), None);
    }
}
