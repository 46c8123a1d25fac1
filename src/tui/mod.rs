//! Terminal User Interface for transform-text.
//!
//! A single screen with an input pane, the tool list, the output pane and a
//! status line. State lives in `AppState` and changes only through actions;
//! the runner renders, reads events, dispatches, and performs effects.

mod app;
mod clipboard;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use clipboard::ClipboardProvider;
pub use events::EventHandler;
pub use runner::TuiRunner;
pub use state::{AppState, Theme};

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode, bracketed paste, and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    stdout().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Theme colors.
pub mod colors {
    use super::Theme;
    use ratatui::style::{Color, Style};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub fg: Color,
        pub bg: Color,
        pub accent: Color,
        pub highlight: Color,
        pub dim: Color,
        pub success: Color,
        pub warning: Color,
        pub error: Color,
    }

    impl Palette {
        pub fn for_theme(theme: Theme) -> Self {
            match theme {
                Theme::Dark => Self {
                    fg: Color::Rgb(226, 232, 240),  // slate-200
                    bg: Color::Rgb(15, 23, 42),     // slate-900
                    accent: Color::Rgb(0, 255, 255), // cyan
                    highlight: Color::Rgb(255, 215, 0),
                    dim: Color::DarkGray,
                    success: Color::Rgb(52, 211, 153), // emerald
                    warning: Color::Rgb(251, 191, 36), // amber
                    error: Color::Rgb(251, 113, 133),  // rose
                },
                Theme::Light => Self {
                    fg: Color::Rgb(15, 23, 42),
                    bg: Color::Rgb(248, 250, 252),
                    accent: Color::Rgb(2, 132, 199),
                    highlight: Color::Rgb(180, 83, 9),
                    dim: Color::Gray,
                    success: Color::Rgb(4, 120, 87),
                    warning: Color::Rgb(180, 83, 9),
                    error: Color::Rgb(190, 18, 60),
                },
            }
        }

        pub fn base(&self) -> Style {
            Style::default().fg(self.fg).bg(self.bg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::colors::Palette;
    use super::*;

    #[test]
    fn test_palettes_differ_by_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_ne!(dark.base(), light.base());
    }
}
