//! Journal vocabulary shared by selector, extractor and writer.
//!
//! # Responsibility
//! - Name the section headings and task markers recognized in journal files.
//! - Derive deterministic file names and titles from a calendar date.
//!
//! # Invariants
//! - Headings are matched by line prefix, never by full-line equality.
//! - One journal file name exists per calendar date.

pub mod journal;
pub mod template;
