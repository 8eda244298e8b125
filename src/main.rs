//! Contact Assistant - Main entry point
//!
//! Wires configuration, logging and the JSON snapshot file to the
//! interactive session on stdin/stdout.

use anyhow::Result;
use contact_assistant::session::run_session;
use contact_assistant::{Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Logging goes to stderr; stdout carries the dialogue
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repository = JsonFileRepository::new(&config.address_book_path);
    info!("Using address book at {}", repository.path().display());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = run_session(stdin.lock(), &mut stdout, &repository) {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
