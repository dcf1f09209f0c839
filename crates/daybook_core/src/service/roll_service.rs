//! Rolls the latest journal into a new one for a given date.
//!
//! # Responsibility
//! - Select the newest dated journal, carry its incomplete tasks, create today's file.
//! - Report what was created for the caller to display.
//!
//! # Invariants
//! - The date is supplied by the caller; the service never reads the clock.
//! - Any failure aborts the roll; no partial outcome is returned.
//! - No previous journal is a normal case yielding an empty Tasks section.

use crate::error::{JournalError, JournalResult};
use crate::model::journal::journal_file_name;
use crate::model::template::render_journal;
use crate::repo::journal_store::JournalStore;
use crate::select::latest::select_latest;
use crate::tasks::carryover::carry_over_tasks;
use chrono::NaiveDate;
use log::info;
use std::io::Write;
use std::path::PathBuf;

/// Summary of a completed roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Path of the journal that was created.
    pub created: PathBuf,
    /// File name tasks were carried from, when one existed.
    pub source: Option<String>,
    /// Number of carried task lines.
    pub carried: usize,
}

/// Roll service facade over a journal store.
pub struct RollService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> RollService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates the journal for `today`.
    ///
    /// Lines read from the previous journal are echoed to `echo`; echo
    /// failures never abort the roll.
    ///
    /// # Errors
    /// - `DirectoryUnreadable` when the directory cannot be listed.
    /// - `SourceUnreadable` when the selected journal cannot be opened or read.
    /// - `DestinationExists` when today's journal is already present.
    /// - `DestinationWrite` when today's journal cannot be created or written.
    pub fn roll(&self, today: NaiveDate, echo: &mut dyn Write) -> JournalResult<RollOutcome> {
        let entries = self.store.list_entries()?;
        let target = journal_file_name(today);
        // Checked before reading so a same-day rerun echoes nothing.
        self.store.ensure_absent(&target)?;
        let latest = select_latest(&entries);

        let tasks = match &latest {
            Some(previous) => {
                info!(
                    "event=journal_select module=service status=ok found=true date={}",
                    previous.date
                );
                let reader = self.store.open_journal(&previous.file_name)?;
                carry_over_tasks(reader, echo).map_err(|source| {
                    JournalError::SourceUnreadable {
                        path: self.store.location().join(&previous.file_name),
                        source,
                    }
                })?
            }
            None => {
                info!("event=journal_select module=service status=ok found=false");
                Vec::new()
            }
        };

        let contents = render_journal(today, &tasks);
        let created = self.store.create_journal(&target, &contents)?;

        info!(
            "event=journal_roll module=service status=ok date={} carried={}",
            today,
            tasks.len()
        );
        Ok(RollOutcome {
            created,
            source: latest.map(|previous| previous.file_name),
            carried: tasks.len(),
        })
    }
}
