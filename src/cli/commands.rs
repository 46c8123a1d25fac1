//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: show the tool catalog
//! - apply: run one tool over text, a file, or stdin
//! - tui: interactive mode (also the default with no subcommand)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// transform-text - escape newlines, convert case, title-case by style guide
#[derive(Parser, Debug)]
#[command(name = "transform-text")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file to use instead of the built-in tool list
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tools and their selection keys
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a tool to some text
    Apply {
        /// Selection key of the tool (e.g. snakeCase, escape)
        key: String,

        /// Text to transform; read from stdin when omitted
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Launch the interactive terminal UI
    Tui,
}
