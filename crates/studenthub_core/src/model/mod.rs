//! Persisted record shapes for the dashboard widgets.
//!
//! # Invariants
//! - Every record is identified by an opaque id, unique within its list.
//! - Record display text is stored trimmed and non-empty.

pub mod exam;
pub mod note;
