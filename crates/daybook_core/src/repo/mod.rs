//! Journal storage contracts and filesystem implementation.
//!
//! # Responsibility
//! - Isolate directory listing, reading and file creation from orchestration.
//!
//! # Invariants
//! - `create_journal` never replaces an existing file.

pub mod journal_store;
