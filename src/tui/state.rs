//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All session state, serializable as a snapshot
//! - `Action`: Everything that can change the state
//! - `Effect`: Side effects the runner must perform after an update
//!
//! State only changes through `AppState::update`; the runner renders it,
//! turns input into actions, and feeds effect outcomes back in as actions.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use transform_text::ToolCatalog;

/// The primary application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Raw text being edited
    pub input: String,
    /// Result of the last applied tool
    pub output: String,
    /// Index of the highlighted tool in the catalog
    pub selected: usize,
    /// Key of the tool that produced `output`
    pub applied: Option<String>,
    /// Which pane receives keystrokes
    pub focus: Focus,
    /// Color scheme
    pub theme: Theme,
    /// Outcome of the last copy attempt
    pub copy_status: Option<CopyStatus>,
    /// How long a copy status stays visible
    pub status_ttl_ms: u64,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            selected: 0,
            applied: None,
            focus: Focus::Input,
            theme: Theme::Dark,
            copy_status: None,
            status_ttl_ms: 3000,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the configured theme and status lifetime.
    pub fn with_settings(theme: Theme, status_ttl_ms: u64) -> Self {
        Self {
            theme,
            status_ttl_ms,
            ..Self::default()
        }
    }

    /// Apply one action. Returns the side effect the caller must run, if any.
    pub fn update(&mut self, action: Action, catalog: &ToolCatalog, now_ms: u64) -> Option<Effect> {
        match action {
            Action::Insert(c) => self.input.push(c),
            Action::InsertText(text) => self.input.push_str(&text),
            Action::Backspace => {
                self.input.pop();
            }
            Action::ClearInput => self.input.clear(),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::SelectNext => {
                if !catalog.is_empty() {
                    self.selected = (self.selected + 1) % catalog.len();
                }
            }
            Action::SelectPrev => {
                if !catalog.is_empty() {
                    self.selected = (self.selected + catalog.len() - 1) % catalog.len();
                }
            }
            Action::ApplySelected => match catalog.at(self.selected) {
                Some(tool) => {
                    let key = tool.key.clone();
                    self.apply(&key, catalog);
                }
                None => warn!("No tool at index {}", self.selected),
            },
            Action::Apply(key) => self.apply(&key, catalog),
            Action::Copy => {
                if self.output.is_empty() {
                    self.set_status(StatusKind::Warning, "Nothing to copy", now_ms);
                } else {
                    return Some(Effect::CopyToClipboard(self.output.clone()));
                }
            }
            Action::CopyFinished(result) => match result {
                Ok(()) => self.set_status(StatusKind::Success, "Text copied to clipboard", now_ms),
                Err(e) => self.set_status(StatusKind::Error, format!("Unable to copy text: {}", e), now_ms),
            },
            Action::ToggleTheme => self.theme = self.theme.toggle(),
            Action::Tick => {
                if self.copy_status.as_ref().is_some_and(|s| now_ms >= s.expires_at_ms) {
                    self.copy_status = None;
                }
            }
            Action::Quit => self.should_quit = true,
        }
        None
    }

    fn apply(&mut self, key: &str, catalog: &ToolCatalog) {
        match catalog.apply(key, &self.input) {
            Ok(output) => {
                debug!("Applied {} to {} chars", key, self.input.len());
                self.output = output;
                self.applied = Some(key.to_string());
                if let Some(index) = catalog.position(key) {
                    self.selected = index;
                }
            }
            Err(e) => warn!("{}; ignoring selection", e),
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>, now_ms: u64) {
        self.copy_status = Some(CopyStatus {
            kind,
            text: text.into(),
            expires_at_ms: now_ms.saturating_add(self.status_ttl_ms),
        });
    }
}

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Input,
    Tools,
}

impl Focus {
    /// Cycle to the next pane.
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Tools,
            Focus::Tools => Focus::Input,
        }
    }
}

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Outcome category of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

/// Short-lived message describing the last copy attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyStatus {
    pub kind: StatusKind,
    pub text: String,
    /// Cleared by the first tick at or after this time
    pub expires_at_ms: u64,
}

/// Everything that can change `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the input
    Insert(char),
    /// Paste text into the input
    InsertText(String),
    Backspace,
    ClearInput,
    FocusNext,
    SelectNext,
    SelectPrev,
    /// Apply the highlighted tool
    ApplySelected,
    /// Apply a tool by selection key
    Apply(String),
    /// Request a clipboard copy of the output
    Copy,
    /// Result of a clipboard copy requested earlier
    CopyFinished(Result<(), String>),
    ToggleTheme,
    /// Periodic refresh; expires the copy status
    Tick,
    Quit,
}

/// Side effects requested by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
}
