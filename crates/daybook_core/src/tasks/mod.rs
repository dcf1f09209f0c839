//! Task carry-over between consecutive journals.
//!
//! # Responsibility
//! - Scan the previous journal's Tasks section in one pass.
//! - Forward incomplete tasks with one more deferral marker.
//!
//! # Invariants
//! - Output order equals input order.
//! - Nothing after the Interactions heading is read.

pub mod carryover;
