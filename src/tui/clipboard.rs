//! Clipboard export for the TUI.
//!
//! Copies text by piping it into whichever clipboard command the host has
//! (pbcopy, wl-copy, xclip, ...). Detection runs once at startup unless the
//! config names a provider explicitly.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};
use transform_text::{Result, TransformError};

/// A clipboard command and its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CopyCommand {
    fn new(command: &str, args: &[&str]) -> Self {
        Self {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Where copied text goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardProvider {
    Pasteboard,
    Wayland,
    XClip,
    XSel,
    Tmux,
    Termux,
    Custom(CopyCommand),
    None,
}

impl ClipboardProvider {
    /// Pick a provider from the environment and installed binaries
    pub fn detect() -> Self {
        let provider = if cfg!(target_os = "macos") && binary_exists("pbcopy") {
            Self::Pasteboard
        } else if env_var_is_set("WAYLAND_DISPLAY") && binary_exists("wl-copy") {
            Self::Wayland
        } else if env_var_is_set("DISPLAY") && binary_exists("xclip") {
            Self::XClip
        } else if env_var_is_set("DISPLAY") && binary_exists("xsel") {
            Self::XSel
        } else if binary_exists("termux-clipboard-set") {
            Self::Termux
        } else if env_var_is_set("TMUX") && binary_exists("tmux") {
            Self::Tmux
        } else {
            Self::None
        };
        log::debug!("Detected clipboard provider: {}", provider.name());
        provider
    }

    /// Short name for logs and status messages
    pub fn name(&self) -> &str {
        match self {
            Self::Pasteboard => "pasteboard",
            Self::Wayland => "wayland",
            Self::XClip => "x-clip",
            Self::XSel => "x-sel",
            Self::Tmux => "tmux",
            Self::Termux => "termux",
            Self::Custom(cmd) => &cmd.command,
            Self::None => "none",
        }
    }

    fn command(&self) -> Option<CopyCommand> {
        match self {
            Self::Pasteboard => Some(CopyCommand::new("pbcopy", &[])),
            Self::Wayland => Some(CopyCommand::new("wl-copy", &["--type", "text/plain"])),
            Self::XClip => Some(CopyCommand::new("xclip", &["-i", "-selection", "clipboard"])),
            Self::XSel => Some(CopyCommand::new("xsel", &["-i", "-b"])),
            Self::Tmux => Some(CopyCommand::new("tmux", &["load-buffer", "-w", "-"])),
            Self::Termux => Some(CopyCommand::new("termux-clipboard-set", &[])),
            Self::Custom(cmd) => Some(cmd.clone()),
            Self::None => None,
        }
    }

    /// Copy `content` to the clipboard
    pub fn set_contents(&self, content: &str) -> Result<()> {
        match self.command() {
            Some(cmd) => execute_command(&cmd, content),
            None => Err(TransformError::Clipboard("no clipboard provider available".to_string())),
        }
    }
}

fn execute_command(cmd: &CopyCommand, input: &str) -> Result<()> {
    let mut child = Command::new(&cmd.command)
        .args(&cmd.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| TransformError::Clipboard(format!("failed to run {}: {}", cmd.command, e)))?;

    // stdin is dropped at the end of the match so the child sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    if !status.success() {
        return Err(TransformError::Clipboard(format!("{} exited with {}", cmd.command, status)));
    }
    Ok(())
}

fn env_var_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

fn binary_exists(name: &str) -> bool {
    which::which(name).is_ok()
}
