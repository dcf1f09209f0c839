//! Journal file naming and directory entry model.
//!
//! # Responsibility
//! - Define the text conventions a journal file is read and written with.
//! - Describe directory listing items and the selector result.
//!
//! # Invariants
//! - `journal_file_name` is zero padded: `Journal-YYYY-MM-DD.md`.
//! - A `LatestJournal` always carries the date parsed from its own file name.

use chrono::NaiveDate;

/// Heading that opens the section tasks are carried from.
pub const TASKS_HEADING: &str = "## Tasks";
/// Heading that ends task scanning.
pub const INTERACTIONS_HEADING: &str = "## Interactions";
/// Free-form section written blank on every new journal.
pub const NOTES_HEADING: &str = "## Notes";

/// Marks a task line as not yet done.
pub const INCOMPLETE_MARKER: &str = "[]";
/// Replaces the first incomplete marker each time a task is carried forward.
pub const DEFERRED_MARKER: &str = "*[]";

const TITLE_PREFIX: &str = "# Daily Work Journal";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the file name used for the journal of `date`.
pub fn journal_file_name(date: NaiveDate) -> String {
    format!("Journal-{}.md", date.format(DATE_FORMAT))
}

/// Returns the top-level title line for the journal of `date`.
pub fn journal_title(date: NaiveDate) -> String {
    format!("{TITLE_PREFIX} {}", date.format(DATE_FORMAT))
}

/// One item of a journal directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub file_name: String,
    /// Directories never qualify, whatever their name embeds.
    pub is_dir: bool,
}

impl JournalEntry {
    /// Creates a regular-file entry.
    pub fn file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            is_dir: false,
        }
    }

    /// Creates a directory entry.
    pub fn dir(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            is_dir: true,
        }
    }
}

/// Most recent dated journal found in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestJournal {
    pub file_name: String,
    /// Date parsed from the file name's embedded token.
    pub date: NaiveDate,
}
