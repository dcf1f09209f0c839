//! Journal roll use-case.
//!
//! # Responsibility
//! - Orchestrate store calls into the single "roll today's journal" operation.

pub mod roll_service;
