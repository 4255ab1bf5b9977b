//! Core logic for the StudentHub dashboard.
//! Widget state, invariants and persistence live here; front ends only
//! translate user input into widget calls.

pub mod db;
pub mod format;
pub mod ids;
pub mod logging;
pub mod model;
pub mod store;
pub mod widget;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exam::ExamRecord;
pub use model::note::NoteRecord;
pub use store::{
    read_records, write_records, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore,
    StoreError, StoreResult, EXAM_REMINDERS_KEY, NOTES_KEY,
};
pub use widget::calculator::{evaluate_percentage, PercentageOutcome};
pub use widget::exams::{ExamAdd, ExamReminders, ExamRow};
pub use widget::notes::{NoteEdit, NotesBoard};
pub use widget::timer::{CountdownTimer, TimerPhase, TimerTicker, TimerView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
