//! Notes list.
//!
//! # Responsibility
//! - Own the note list loaded from `studenthub_notes`.
//! - Add (newest first), edit in place and delete notes, persisting the
//!   full list after each change.
//!
//! # Invariants
//! - Stored text is trimmed and non-empty.
//! - Edits never move a note; deletes keep the relative order of the rest.

use crate::format::escape_html;
use crate::ids::IdGenerator;
use crate::model::note::NoteRecord;
use crate::store::{read_records, write_records, KeyValueStore, StoreResult, NOTES_KEY};
use log::{debug, info};

/// Placeholder row text for an empty list.
pub const NOTES_EMPTY_TEXT: &str = "No notes saved yet.";

/// Result of an edit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEdit {
    Updated,
    /// The user dismissed the edit prompt.
    Cancelled,
    /// The replacement trimmed to nothing; original text kept.
    Blank,
    NotFound,
}

/// Notes widget state.
pub struct NotesBoard<S: KeyValueStore, G: IdGenerator> {
    store: S,
    ids: G,
    notes: Vec<NoteRecord>,
}

impl<S: KeyValueStore, G: IdGenerator> NotesBoard<S, G> {
    /// Loads the persisted list; corrupt or absent data loads as empty.
    pub fn load(store: S, ids: G) -> Self {
        let notes = read_records(&store, NOTES_KEY);
        Self { store, ids, notes }
    }

    /// Notes, newest first.
    pub fn notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&NoteRecord> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Prepends a note. Returns `None` when the text is blank.
    pub fn add(&mut self, text: &str) -> StoreResult<Option<NoteRecord>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=note_add module=notes status=rejected reason=blank_text");
            return Ok(None);
        }

        let record = NoteRecord {
            id: self.ids.next_id(),
            text: text.to_string(),
        };
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(record.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        info!(
            "event=note_add module=notes status=ok id={} count={}",
            record.id,
            self.notes.len()
        );
        Ok(Some(record))
    }

    /// Replaces a note's text in place.
    ///
    /// `replacement` is the edit prompt result; `None` means cancelled.
    pub fn edit(&mut self, id: &str, replacement: Option<&str>) -> StoreResult<NoteEdit> {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            debug!("event=note_edit module=notes status=not_found id={id}");
            return Ok(NoteEdit::NotFound);
        };
        let Some(replacement) = replacement else {
            debug!("event=note_edit module=notes status=cancelled id={id}");
            return Ok(NoteEdit::Cancelled);
        };
        let cleaned = replacement.trim();
        if cleaned.is_empty() {
            debug!("event=note_edit module=notes status=rejected reason=blank_text id={id}");
            return Ok(NoteEdit::Blank);
        }

        let mut next = self.notes.clone();
        next[index].text = cleaned.to_string();
        self.commit(next)?;

        info!("event=note_edit module=notes status=ok id={id}");
        Ok(NoteEdit::Updated)
    }

    /// Deletes the note with `id`. Returns `false` when no note matched.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let next: Vec<NoteRecord> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        if next.len() == self.notes.len() {
            debug!("event=note_delete module=notes status=not_found id={id}");
            return Ok(false);
        }
        self.commit(next)?;
        info!(
            "event=note_delete module=notes status=ok id={id} count={}",
            self.notes.len()
        );
        Ok(true)
    }

    /// List markup with escaped text and edit/delete controls.
    pub fn render_html(&self) -> String {
        if self.notes.is_empty() {
            return format!(r#"<li class="empty-state">{NOTES_EMPTY_TEXT}</li>"#);
        }
        self.notes
            .iter()
            .map(|note| {
                let id = escape_html(&note.id);
                format!(
                    concat!(
                        r#"<li class="data-item"><div>"#,
                        r#"<p class="item-title">{text}</p>"#,
                        r#"</div><div class="item-actions">"#,
                        r#"<button class="btn-icon" data-edit-note="{id}">Edit</button>"#,
                        r#"<button class="btn-icon btn-danger" data-delete-note="{id}">Delete</button>"#,
                        r#"</div></li>"#
                    ),
                    text = escape_html(&note.text),
                    id = id,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn commit(&mut self, next: Vec<NoteRecord>) -> StoreResult<()> {
        write_records(&self.store, NOTES_KEY, &next)?;
        self.notes = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteEdit, NotesBoard, NOTES_EMPTY_TEXT};
    use crate::ids::SequentialIdGenerator;
    use crate::store::MemoryKeyValueStore;

    #[test]
    fn add_rejects_blank_text() {
        let store = MemoryKeyValueStore::new();
        let mut notes = NotesBoard::load(&store, SequentialIdGenerator::new());
        assert_eq!(notes.add(" \t ").unwrap(), None);
        assert!(notes.notes().is_empty());
    }

    #[test]
    fn edit_outcomes_leave_text_unless_updated() {
        let store = MemoryKeyValueStore::new();
        let mut notes = NotesBoard::load(&store, SequentialIdGenerator::new());
        let note = notes.add("Buy pens").unwrap().expect("note should be added");

        assert_eq!(notes.edit(&note.id, None).unwrap(), NoteEdit::Cancelled);
        assert_eq!(notes.edit(&note.id, Some("   ")).unwrap(), NoteEdit::Blank);
        assert_eq!(notes.edit("missing", Some("x")).unwrap(), NoteEdit::NotFound);
        assert_eq!(notes.get(&note.id).unwrap().text, "Buy pens");

        assert_eq!(
            notes.edit(&note.id, Some("  Buy gel pens ")).unwrap(),
            NoteEdit::Updated
        );
        assert_eq!(notes.get(&note.id).unwrap().text, "Buy gel pens");
    }

    #[test]
    fn html_lists_notes_with_controls() {
        let store = MemoryKeyValueStore::new();
        let mut notes = NotesBoard::load(&store, SequentialIdGenerator::new());
        assert_eq!(
            notes.render_html(),
            format!(r#"<li class="empty-state">{NOTES_EMPTY_TEXT}</li>"#)
        );

        notes.add("a < b & c").unwrap();
        let html = notes.render_html();
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(html.contains(r#"data-edit-note="1""#));
        assert!(html.contains(r#"data-delete-note="1""#));
    }
}
