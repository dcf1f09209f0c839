//! Picks the newest dated journal from a directory listing.
//!
//! # Responsibility
//! - Extract the `YYYY-MM-DD` token embedded in a file name.
//! - Choose the entry whose token is the greatest calendar date.
//!
//! # Invariants
//! - Directories and names without a parseable token are skipped, never errors.
//! - On equal dates the first entry in listing order wins.
//! - An empty result is a normal first-run outcome.

use crate::model::journal::{JournalEntry, LatestJournal};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy prefix: the last `-YYYY-MM-DD` token in a name is captured.
// ASCII digits only; `\d` would also match other scripts' digits.
static DATE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".*-([0-9]{4}-[0-9]{2}-[0-9]{2}).*").expect("valid date token regex")
});

/// Returns the calendar date embedded in `file_name`, if any.
///
/// Tokens that match the shape but not a real date (`2024-13-40`) yield `None`.
pub fn embedded_date(file_name: &str) -> Option<NaiveDate> {
    let token = DATE_TOKEN_RE.captures(file_name)?.get(1)?.as_str();
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

/// Returns the entry with the greatest embedded date.
pub fn select_latest<'a, I>(entries: I) -> Option<LatestJournal>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut latest: Option<LatestJournal> = None;
    for entry in entries {
        if entry.is_dir {
            continue;
        }
        let Some(date) = embedded_date(&entry.file_name) else {
            continue;
        };
        // Strict comparison keeps the earlier entry on ties.
        if latest.as_ref().map_or(true, |current| date > current.date) {
            latest = Some(LatestJournal {
                file_name: entry.file_name.clone(),
                date,
            });
        }
    }
    latest
}
