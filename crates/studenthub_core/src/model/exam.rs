//! Exam reminder record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One upcoming (or past) exam.
///
/// Serialized as `{"id", "name", "date"}` with `date` in `YYYY-MM-DD`
/// form. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
}
