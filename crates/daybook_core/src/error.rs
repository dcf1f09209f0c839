//! Failure taxonomy for a journal roll.
//!
//! # Invariants
//! - Every variant is fatal to the current roll; nothing is retried.
//! - Every variant names the path (or setting) involved.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type JournalResult<T> = Result<T, JournalError>;

#[derive(Debug)]
pub enum JournalError {
    /// The journal directory setting is absent or blank.
    MissingJournalDir { variable: &'static str },
    /// The journal directory cannot be listed.
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    /// The selected previous journal cannot be opened or read.
    SourceUnreadable { path: PathBuf, source: io::Error },
    /// Today's journal already exists; nothing was written.
    DestinationExists { path: PathBuf },
    /// Today's journal cannot be created or fully written.
    DestinationWrite { path: PathBuf, source: io::Error },
}

impl JournalError {
    /// Stable machine-friendly code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingJournalDir { .. } => "journal_dir_missing",
            Self::DirectoryUnreadable { .. } => "journal_dir_unreadable",
            Self::SourceUnreadable { .. } => "source_unreadable",
            Self::DestinationExists { .. } => "destination_exists",
            Self::DestinationWrite { .. } => "destination_write_failed",
        }
    }
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingJournalDir { variable } => {
                write!(f, "journal directory is not configured; set `{variable}`")
            }
            Self::DirectoryUnreadable { path, source } => write!(
                f,
                "journal directory `{}` cannot be read: {source}",
                path.display()
            ),
            Self::SourceUnreadable { path, source } => write!(
                f,
                "unable to open most recent journal `{}`: {source}",
                path.display()
            ),
            Self::DestinationExists { path } => {
                write!(f, "journal already exists: `{}`", path.display())
            }
            Self::DestinationWrite { path, source } => write!(
                f,
                "unable to write journal `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DirectoryUnreadable { source, .. }
            | Self::SourceUnreadable { source, .. }
            | Self::DestinationWrite { source, .. } => Some(source),
            Self::MissingJournalDir { .. } | Self::DestinationExists { .. } => None,
        }
    }
}
