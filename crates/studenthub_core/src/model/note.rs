//! Free-text note record.

use serde::{Deserialize, Serialize};

/// One saved note. `text` is replaced in place by edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    pub text: String,
}
