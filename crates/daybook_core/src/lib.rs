//! Core logic for rolling a dated daily journal forward.
//! This crate is the single source of truth for journal conventions.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod select;
pub mod service;
pub mod tasks;

pub use config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::journal::{journal_file_name, journal_title, JournalEntry, LatestJournal};
pub use model::template::render_journal;
pub use repo::journal_store::{FsJournalStore, JournalStore};
pub use select::latest::{embedded_date, select_latest};
pub use service::roll_service::{RollOutcome, RollService};
pub use tasks::carryover::{carry_over_tasks, defer_task, ScanState};
