//! Mailchat TUI Entry Point
//!
//! Usage:
//!   mailchat-tui [OPTIONS]
//!
//! Options:
//!   --api-url <URL>     Q&A service base URL (env: MAILCHAT_API_URL)
//!   --config <PATH>     Config file (env: MAILCHAT_CONFIG)
//!   --log-file <PATH>   Where tracing output goes

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use mailchat_core::{load_config, load_config_from_path, ConductorConfig};
use mailchat_tui::App;

/// Default log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "mailchat_core=info,mailchat_tui=info";

#[derive(Parser, Debug)]
#[command(name = "mailchat-tui")]
#[command(about = "Chat with your email from the terminal")]
#[command(version)]
struct Args {
    /// Base URL of the Q&A service
    #[arg(long, env = "MAILCHAT_API_URL")]
    api_url: Option<String>,

    /// Path to the config file
    #[arg(long, env = "MAILCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Log file (the terminal is busy drawing the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.clone())?;

    let config = resolve_config(&args)?;
    tracing::info!(base_url = %config.base_url, "Starting mailchat TUI");

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("❌ Error: mailchat-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Running in a non-interactive environment (CI, container)");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    let mut app = App::new(config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        messages = app.conductor().history().len(),
        "Mailchat TUI exited"
    );

    result
}

/// Send tracing output to a file, filtered by RUST_LOG
fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("mailchat.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

/// Defaults, then the config file, then command-line/env overrides
fn resolve_config(args: &Args) -> anyhow::Result<ConductorConfig> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config()?,
    };

    match &args.api_url {
        Some(url) => Ok(config.with_base_url(url.clone())?),
        None => Ok(config),
    }
}
