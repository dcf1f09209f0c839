//! Latest dated journal selection.
//!
//! # See also
//! - `model::journal::LatestJournal`

pub mod latest;
