//! Platform-neutral input events

use paintbrush_core::Key;

/// An input event as seen by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the window
    Quit,
    /// A key was pressed (auto-repeat excluded)
    KeyDown(Key),
    /// A key was released
    KeyUp(Key),
}

/// Source of pending input events
pub trait EventSource {
    /// Drain every event that arrived since the last poll
    fn poll(&mut self) -> Vec<Event>;
}

/// Event source replaying a fixed script, one batch per poll
///
/// Once the script runs out every poll returns no events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    batches: std::collections::VecDeque<Vec<Event>>,
}

impl ScriptedEvents {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<Event>>,
    {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    /// Queue another batch for a later poll
    pub fn push_batch(&mut self, batch: Vec<Event>) {
        self.batches.push_back(batch);
    }

    /// Batches not yet polled
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<Event> {
        self.batches.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_events_in_order() {
        let mut events = ScriptedEvents::new([
            vec![Event::KeyDown(Key::Right)],
            vec![],
            vec![Event::KeyUp(Key::Right), Event::Quit],
        ]);

        assert_eq!(events.poll(), vec![Event::KeyDown(Key::Right)]);
        assert!(events.poll().is_empty());
        assert_eq!(events.remaining(), 1);
        assert_eq!(events.poll(), vec![Event::KeyUp(Key::Right), Event::Quit]);
        assert!(events.poll().is_empty());
    }
}
