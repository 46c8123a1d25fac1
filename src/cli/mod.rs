//! CLI module for transform-text - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing tools,
//! applying one tool, and launching the TUI.

pub mod commands;

pub use commands::Cli;
