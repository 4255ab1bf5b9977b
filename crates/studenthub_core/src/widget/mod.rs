//! Dashboard widgets.
//!
//! # Responsibility
//! - Own each widget's state explicitly; no widget shares state with another.
//! - Persist list widgets after every successful mutation.
//!
//! # Invariants
//! - Rejected user input is reported as an outcome value, never an error.
//! - A failed write leaves in-memory widget state unchanged.

pub mod calculator;
pub mod exams;
pub mod notes;
pub mod timer;
