//! Process configuration resolved once at the entry boundary.
//!
//! # Responsibility
//! - Read the journal directory and logging settings from environment keys.
//! - Keep core operations free of process-global lookups.
//!
//! # Invariants
//! - `journal_dir` is never empty.
//! - Blank optional values are treated as unset.

use crate::error::{JournalError, JournalResult};
use std::path::PathBuf;

/// Directory holding dated journal files.
pub const JOURNAL_DIR_VAR: &str = "JOURNAL_DIR";
/// Optional log level override (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_VAR: &str = "DAYBOOK_LOG_LEVEL";
/// Optional absolute directory for rolling log files; stderr when unset.
pub const LOG_DIR_VAR: &str = "DAYBOOK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    pub journal_dir: PathBuf,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl JournalConfig {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    /// - `MissingJournalDir` when `JOURNAL_DIR` is unset or blank.
    pub fn from_env() -> JournalResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> JournalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let journal_dir = non_blank(JOURNAL_DIR_VAR)
            .map(PathBuf::from)
            .ok_or(JournalError::MissingJournalDir {
                variable: JOURNAL_DIR_VAR,
            })?;

        Ok(Self {
            journal_dir,
            log_level: non_blank(LOG_LEVEL_VAR),
            log_dir: non_blank(LOG_DIR_VAR).map(PathBuf::from),
        })
    }
}
