//! `daybook` entry point.
//!
//! # Responsibility
//! - Resolve configuration from the environment once.
//! - Roll today's journal and turn any failure into a non-zero exit.

use daybook_core::{
    default_log_level, init_logging, FsJournalStore, JournalConfig, JournalError, RollService,
};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=journal_roll module=cli status=error error_code={}", err.code());
            eprintln!("daybook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), JournalError> {
    let config = JournalConfig::from_env()?;

    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(message) = init_logging(level, config.log_dir.as_deref()) {
        // Logging is diagnostic only; the roll proceeds without it.
        eprintln!("daybook: logging disabled: {message}");
    }

    let today = chrono::Local::now().date_naive();
    let service = RollService::new(FsJournalStore::new(&config.journal_dir));
    let outcome = service.roll(today, &mut io::stdout().lock())?;

    match &outcome.source {
        Some(source) => eprintln!(
            "daybook: created {} ({} task(s) carried from {source})",
            outcome.created.display(),
            outcome.carried
        ),
        None => eprintln!("daybook: created {}", outcome.created.display()),
    }
    Ok(())
}
