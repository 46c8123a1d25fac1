//! Terminal input: key presses, bracketed paste, and a tick when idle.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Paste(String),
    /// No input within one tick
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for input.
    ///
    /// Returns `None` for terminal events the app has no use for: key
    /// releases, resizes (the next draw picks up the new size), mouse and
    /// focus changes.
    pub async fn next(&self) -> Result<Option<Event>> {
        let tick_rate = self.tick_rate;
        tokio::task::spawn_blocking(move || -> Result<Option<Event>> {
            if !event::poll(tick_rate)? {
                return Ok(Some(Event::Tick));
            }
            Ok(translate(event::read()?))
        })
        .await?
    }
}

fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_tick_rate_from_config() {
        assert_eq!(EventHandler::new(100).tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_key_press_passes() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(translate(CrosstermEvent::Key(key)), Some(Event::Key(key)));
    }

    #[test]
    fn test_key_release_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(CrosstermEvent::Key(key)), None);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            translate(CrosstermEvent::Paste("Hello\nWorld".to_string())),
            Some(Event::Paste("Hello\nWorld".to_string()))
        );
        assert_eq!(translate(CrosstermEvent::Resize(80, 24)), None);
        assert_eq!(translate(CrosstermEvent::FocusGained), None);
    }
}
