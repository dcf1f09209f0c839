//! Journal directory access.
//!
//! # Responsibility
//! - List directory entries in the order the filesystem yields them.
//! - Open a previous journal for buffered reading.
//! - Create today's journal exactly once and commit its contents to disk.
//!
//! # Invariants
//! - An existing destination is reported before any byte is written.
//! - Opened handles are released on every return path.

use crate::error::{JournalError, JournalResult};
use crate::model::journal::JournalEntry;
use log::{error, info};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Storage contract used by the roll service.
pub trait JournalStore {
    /// Directory (or equivalent) the store operates on.
    fn location(&self) -> &Path;

    /// Lists every entry of the journal directory.
    fn list_entries(&self) -> JournalResult<Vec<JournalEntry>>;

    /// Opens an existing journal by file name.
    fn open_journal(&self, file_name: &str) -> JournalResult<Box<dyn BufRead>>;

    /// Fails with `DestinationExists` when `file_name` is already present.
    fn ensure_absent(&self, file_name: &str) -> JournalResult<()>;

    /// Creates `file_name` with `contents`, refusing to overwrite.
    ///
    /// Returns the path of the created file.
    fn create_journal(&self, file_name: &str, contents: &str) -> JournalResult<PathBuf>;
}

/// Filesystem-backed journal directory.
#[derive(Debug, Clone)]
pub struct FsJournalStore {
    dir: PathBuf,
}

impl FsJournalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl JournalStore for FsJournalStore {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn list_entries(&self) -> JournalResult<Vec<JournalEntry>> {
        let started_at = Instant::now();
        let unreadable = |source: io::Error| {
            error!(
                "event=journal_scan module=repo status=error error_code=journal_dir_unreadable error={}",
                source
            );
            JournalError::DirectoryUnreadable {
                path: self.dir.clone(),
                source,
            }
        };

        let mut entries = Vec::new();
        for item in fs::read_dir(&self.dir).map_err(unreadable)? {
            let item = item.map_err(unreadable)?;
            // Names that are not UTF-8 cannot carry a parseable date token.
            let Ok(file_name) = item.file_name().into_string() else {
                continue;
            };
            let is_dir = item.file_type().map_err(unreadable)?.is_dir();
            entries.push(JournalEntry { file_name, is_dir });
        }

        info!(
            "event=journal_scan module=repo status=ok entries={} duration_ms={}",
            entries.len(),
            started_at.elapsed().as_millis()
        );
        Ok(entries)
    }

    fn open_journal(&self, file_name: &str) -> JournalResult<Box<dyn BufRead>> {
        let path = self.path_of(file_name);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(source) => {
                error!(
                    "event=journal_open module=repo status=error error_code=source_unreadable error={}",
                    source
                );
                Err(JournalError::SourceUnreadable { path, source })
            }
        }
    }

    fn ensure_absent(&self, file_name: &str) -> JournalResult<()> {
        let path = self.path_of(file_name);
        // A destination that cannot be inspected is treated as present.
        if path.try_exists().unwrap_or(true) {
            error!("event=journal_create module=repo status=error error_code=destination_exists");
            return Err(JournalError::DestinationExists { path });
        }
        Ok(())
    }

    fn create_journal(&self, file_name: &str, contents: &str) -> JournalResult<PathBuf> {
        let started_at = Instant::now();
        self.ensure_absent(file_name)?;
        let path = self.path_of(file_name);

        // `create_new` keeps the guard even if the file appears after the check.
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
                error!(
                    "event=journal_create module=repo status=error error_code=destination_exists"
                );
                return Err(JournalError::DestinationExists { path });
            }
            Err(source) => {
                error!(
                    "event=journal_create module=repo status=error error_code=destination_write_failed error={}",
                    source
                );
                return Err(JournalError::DestinationWrite { path, source });
            }
        };

        if let Err(source) = write_all_synced(file, contents) {
            error!(
                "event=journal_create module=repo status=error error_code=destination_write_failed error={}",
                source
            );
            return Err(JournalError::DestinationWrite { path, source });
        }

        info!(
            "event=journal_create module=repo status=ok bytes={} duration_ms={}",
            contents.len(),
            started_at.elapsed().as_millis()
        );
        Ok(path)
    }
}

fn write_all_synced(file: File, contents: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::{FsJournalStore, JournalStore};
    use crate::error::JournalError;
    use std::fs;
    use std::io::Read;

    #[test]
    fn list_entries_marks_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Journal-2024-01-01.md"), "x").unwrap();
        fs::create_dir(dir.path().join("archive-2024-02-01")).unwrap();

        let store = FsJournalStore::new(dir.path());
        let mut entries = store.list_entries().unwrap();
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name, "Journal-2024-01-01.md");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[1].file_name, "archive-2024-02-01");
        assert!(entries[1].is_dir);
    }

    #[test]
    fn list_entries_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsJournalStore::new(dir.path().join("nope"));
        let err = store.list_entries().unwrap_err();
        assert!(matches!(err, JournalError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn open_journal_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Journal-2024-01-01.md"), "## Tasks\n").unwrap();

        let store = FsJournalStore::new(dir.path());
        let mut text = String::new();
        store
            .open_journal("Journal-2024-01-01.md")
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "## Tasks\n");
    }

    #[test]
    fn open_journal_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsJournalStore::new(dir.path());
        let err = store.open_journal("Journal-2024-01-01.md").err().unwrap();
        assert!(matches!(err, JournalError::SourceUnreadable { .. }));
    }

    #[test]
    fn create_journal_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsJournalStore::new(dir.path());

        let path = store.create_journal("Journal-2024-06-02.md", "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        let err = store
            .create_journal("Journal-2024-06-02.md", "second")
            .unwrap_err();
        assert!(matches!(err, JournalError::DestinationExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn ensure_absent_detects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsJournalStore::new(dir.path());
        store.ensure_absent("Journal-2024-06-02.md").unwrap();

        fs::write(dir.path().join("Journal-2024-06-02.md"), "kept").unwrap();
        let err = store.ensure_absent("Journal-2024-06-02.md").unwrap_err();
        assert!(matches!(err, JournalError::DestinationExists { .. }));
    }

    #[test]
    fn create_journal_reports_uncreatable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsJournalStore::new(dir.path().join("missing-subdir"));
        let err = store.create_journal("Journal-2024-06-02.md", "x").unwrap_err();
        assert!(matches!(err, JournalError::DestinationWrite { .. }));
    }
}
