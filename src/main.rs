use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info, warn};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use transform_text::{ToolCatalog, TransformError};

mod cli;
mod config;
mod tui;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transform-text")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("transform-text.log");

    // Setup env_logger with file output so the TUI screen stays clean
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<ToolCatalog> {
    match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            ToolCatalog::from_file(path).context(format!("Failed to load catalog from {}", path.display()))
        }
        None => Ok(ToolCatalog::builtin()),
    }
}

fn run_application(cli: &Cli, config: &Config, catalog: ToolCatalog) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Tui) => run_tui(config, catalog),
        Some(Commands::List { json }) => handle_list_command(&catalog, *json, cli.is_verbose()),
        Some(Commands::Apply { key, text, file }) => {
            handle_apply_command(&catalog, key, text.as_deref(), file.as_deref())
        }
    }
}

fn run_tui(config: &Config, catalog: ToolCatalog) -> Result<()> {
    info!("Launching TUI mode with {} tools", catalog.len());

    let state = tui::AppState::with_settings(config.tui.theme, config.tui.copy_status_ttl_ms);
    let app = tui::App::new(state, catalog);
    let events = tui::EventHandler::new(config.tui.tick_rate_ms);
    let clipboard = config.clipboard.resolve();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = tui::TuiRunner::new(terminal, app, events, clipboard);
    let result = runtime.block_on(runner.run());

    let restored = tui::restore_terminal().context("Failed to restore terminal");
    keep_loop_error(result, restored)
}

/// Prefer the loop's own error; a restore failure is only returned when the
/// loop itself succeeded.
fn keep_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        error!("{:#}", e);
    }
    result.and(restored)
}

fn handle_list_command(catalog: &ToolCatalog, json: bool, verbose: bool) -> Result<()> {
    info!("Listing {} tools", catalog.len());
    if json {
        let tools: Vec<_> = catalog.tools().collect();
        println!("{}", serde_json::to_string_pretty(&tools).context("Failed to serialize catalog")?);
        return Ok(());
    }
    for (i, tool) in catalog.tools().enumerate() {
        if verbose {
            println!("{:>2}. {:<22} {} ({})", i + 1, tool.label, tool.key.cyan(), tool.rule);
        } else {
            println!("{:>2}. {:<22} {}", i + 1, tool.label, tool.key.cyan());
        }
    }
    Ok(())
}

fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path).context(format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
    Ok(buffer)
}

fn handle_apply_command(catalog: &ToolCatalog, key: &str, text: Option<&str>, file: Option<&Path>) -> Result<()> {
    info!("Applying tool: {}", key);

    // check the key before blocking on stdin
    if !catalog.contains(key) {
        warn!("Unknown tool requested: {}", key);
        eprintln!("{} {}", "Unknown tool:".red(), key);
        eprintln!("  Available: {}", catalog.keys().join(", "));
        return Err(TransformError::UnknownTool(key.to_string()).into());
    }

    let input = read_input(text, file)?;
    let output = catalog.apply(key, &input)?;
    println!("{}", output);
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    let catalog = load_catalog(&cli, &config)?;

    // Run the main application logic
    run_application(&cli, &config, catalog).context("Application failed")?;

    Ok(())
}
