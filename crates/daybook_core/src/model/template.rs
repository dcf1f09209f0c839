//! Layout of a freshly rolled journal.

use super::journal::{journal_title, INTERACTIONS_HEADING, NOTES_HEADING, TASKS_HEADING};
use chrono::NaiveDate;

/// Renders the full text of the journal for `date`.
///
/// Carried tasks follow the Tasks heading in the given order, one per line.
/// Interactions and Notes are written as empty sections.
pub fn render_journal<S: AsRef<str>>(date: NaiveDate, tasks: &[S]) -> String {
    let mut out = String::new();
    out.push_str(&journal_title(date));
    out.push_str("\n\n");
    out.push_str(TASKS_HEADING);
    out.push_str("\n\n");
    for task in tasks {
        out.push_str(task.as_ref());
        out.push('\n');
    }
    out.push('\n');
    for heading in [INTERACTIONS_HEADING, NOTES_HEADING] {
        out.push_str(heading);
        out.push_str("\n\n");
    }
    out
}
