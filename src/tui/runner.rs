//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → handle events → dispatch actions → run effects → repeat.

use super::Tui;
use super::app::App;
use super::clipboard::ClipboardProvider;
use super::events::{Event, EventHandler};
use super::state::{Action, Effect};
use super::views::render;
use eyre::Result;
use log::{info, warn};

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Application state and key bindings
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
    /// Destination for copied output
    clipboard: ClipboardProvider,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, app: App, event_handler: EventHandler, clipboard: ClipboardProvider) -> Self {
        Self {
            terminal,
            app,
            event_handler,
            clipboard,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Render current state
            let app = &self.app;
            self.terminal.draw(|f| render(app.state(), app.catalog(), f))?;

            // 2. Turn the next event into an action
            let action = match self.event_handler.next().await? {
                Some(Event::Key(key)) => self.app.action_for_key(key),
                Some(Event::Paste(text)) => Some(Action::InsertText(text)),
                Some(Event::Tick) => Some(Action::Tick),
                None => None,
            };

            // 3. Update state and run any requested effect
            if let Some(action) = action {
                if let Some(effect) = self.app.dispatch(action, now_ms()) {
                    let outcome = self.perform(effect).await;
                    self.app.dispatch(outcome, now_ms());
                }
            }

            // 4. Check for quit
            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    /// Perform a side effect and report its outcome as an action.
    async fn perform(&self, effect: Effect) -> Action {
        match effect {
            Effect::CopyToClipboard(text) => {
                let clipboard = self.clipboard.clone();
                let result = tokio::task::spawn_blocking(move || clipboard.set_contents(&text))
                    .await
                    .map_err(|e| e.to_string())
                    .and_then(|r| r.map_err(|e| e.to_string()));
                match &result {
                    Ok(()) => info!("Copied output via {}", self.clipboard.name()),
                    Err(e) => warn!("Copy failed: {}", e),
                }
                Action::CopyFinished(result)
            }
        }
    }
}

/// Get current timestamp in milliseconds since Unix epoch
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
