//! Urban Dictionary TUI
//!
//! Type a word, press enter, read what the internet thinks it means.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use urbandict_tui::app::{App, AppConfig};
use urbandict_tui::event::EventHandler;
use urbandict_tui::fetch::DEFAULT_ENDPOINT;
use urbandict_tui::logging;
use urbandict_tui::ui::Ui;

#[derive(Parser)]
#[command(name = "urbandict-tui")]
#[command(about = "Look up words on Urban Dictionary from the terminal")]
struct Cli {
    /// Define endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds to wait for a lookup before giving up
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,

    /// Milliseconds between redraws
    #[arg(long, default_value_t = 100)]
    tick_rate_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            endpoint: cli.endpoint,
            timeout: Duration::from_secs(cli.timeout_secs),
            tick_rate: Duration::from_millis(cli.tick_rate_ms),
            log_file: cli.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());

    // Set up error handling
    color_eyre::install()?;
    install_panic_hook();

    logging::init(config.log_file.as_deref())?;

    let mut app = App::new(config.clone(), Ui::default())?;

    setup_terminal()?;
    let result = run(&mut app, &config).await;
    restore_terminal()?;

    result
}

async fn run(app: &mut App, config: &AppConfig) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut events = EventHandler::with_terminal(config.tick_rate);

    app.run(&mut terminal, &mut events).await
}

/// Leave the alternate screen before a panic message is printed.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

fn setup_terminal() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;

    Ok(())
}
