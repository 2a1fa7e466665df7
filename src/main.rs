//! Address Book - Main entry point
//!
//! Reads one command per line from stdin and writes each reply to stdout.
//! Logs go to stderr.

use address_book::{CommandProcessor, Config};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting address book with page size {}", config.page_size);

    let mut processor = CommandProcessor::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Hello! How can I help you?")?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match processor.handle_line(&line) {
            Ok(outcome) => {
                writeln!(stdout, "{}", outcome.message())?;
                if outcome.is_exit() {
                    break;
                }
            }
            Err(e) => {
                warn!("Command failed: {}", e);
                writeln!(stdout, "{}", e)?;
            }
        }
    }

    if let Err(e) = stdout.flush() {
        error!("Failed to flush stdout: {}", e);
    }
    info!(
        "Address book session ended with {} contacts",
        processor.book().len()
    );
    Ok(())
}
