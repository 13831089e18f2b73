//! tui-gauge - live demo dashboard of progress gauges
//!
//! Runs a set of simulated jobs, each reporting progress to its own gauge from
//! a background task while the dashboard redraws. An optional JSON config file
//! given as the first argument replaces the built-in jobs.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use color_eyre::Result;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;
use tui_gauge::app::{App, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::new(),
    };
    setup_logging(&config)?;

    setup_terminal()?;
    let result = App::new(config).run_with_crossterm().await;
    // Restore the terminal before reporting any error from the loop.
    restore_terminal()?;

    result
}

fn setup_logging(config: &AppConfig) -> Result<()> {
    let file = File::create(&config.log_file)
        .wrap_err_with(|| format!("failed to create log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn setup_terminal() -> Result<()> {
    crossterm::terminal::enable_raw_mode().wrap_err("failed to enable raw mode")?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )
    .wrap_err("failed to enter the alternate screen")?;

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
