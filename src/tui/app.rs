//! TUI Application
//!
//! Owns the state and catalog, and translates key presses into actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use transform_text::ToolCatalog;

use super::state::{Action, AppState, Effect, Focus};

/// Main TUI application
pub struct App {
    state: AppState,
    catalog: ToolCatalog,
}

impl App {
    /// Create a new application
    pub fn new(state: AppState, catalog: ToolCatalog) -> Self {
        Self { state, catalog }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Run one action through the state.
    pub fn dispatch(&mut self, action: Action, now_ms: u64) -> Option<Effect> {
        self.state.update(action, &self.catalog, now_ms)
    }

    /// Map a key press to an action for the current focus.
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('t') if ctrl => return Some(Action::ApplySelected),
            KeyCode::Char('y') if ctrl => return Some(Action::Copy),
            KeyCode::Char('l') if ctrl => return Some(Action::ToggleTheme),
            KeyCode::Char('u') if ctrl => return Some(Action::ClearInput),
            KeyCode::Tab | KeyCode::BackTab => return Some(Action::FocusNext),
            _ => {}
        }

        match self.state.focus {
            Focus::Input => match key.code {
                KeyCode::Char(c) if !ctrl => Some(Action::Insert(c)),
                KeyCode::Enter => Some(Action::Insert('\n')),
                KeyCode::Backspace => Some(Action::Backspace),
                _ => None,
            },
            Focus::Tools => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
                KeyCode::Enter => Some(Action::ApplySelected),
                KeyCode::Char('y') => Some(Action::Copy),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
        }
    }
}
