//! Exam reminder list.
//!
//! # Responsibility
//! - Own the exam list loaded from `studenthub_exam_reminders`.
//! - Add/remove records and persist the full list after each change.
//! - Project the list into date-sorted rows with countdown labels.
//!
//! # Invariants
//! - Stored names are trimmed and non-empty; dates are valid calendar dates.
//! - Display order is by date ascending; equal dates keep list order.
//! - Storage order is insertion order and is not rewritten by rendering.

use crate::format::{countdown_label, days_left, escape_html, format_date};
use crate::ids::IdGenerator;
use crate::model::exam::ExamRecord;
use crate::store::{read_records, write_records, KeyValueStore, StoreResult, EXAM_REMINDERS_KEY};
use chrono::NaiveDate;
use log::{debug, info};

/// Placeholder row text for an empty list.
pub const EXAMS_EMPTY_TEXT: &str = "No exams added yet.";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Result of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamAdd {
    Added(ExamRecord),
    /// Blank name, blank date or a date that is not `YYYY-MM-DD`.
    Rejected,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRow {
    pub id: String,
    pub name: String,
    /// e.g. `5 Jun 2025`.
    pub date_label: String,
    pub days_left: i64,
    /// `Today`, `N day(s) left` or `N day(s) ago`.
    pub countdown: String,
}

/// Exam reminder widget state.
pub struct ExamReminders<S: KeyValueStore, G: IdGenerator> {
    store: S,
    ids: G,
    exams: Vec<ExamRecord>,
}

impl<S: KeyValueStore, G: IdGenerator> ExamReminders<S, G> {
    /// Loads the persisted list; corrupt or absent data loads as empty.
    pub fn load(store: S, ids: G) -> Self {
        let exams = read_records(&store, EXAM_REMINDERS_KEY);
        Self { store, ids, exams }
    }

    /// Records in storage order.
    pub fn exams(&self) -> &[ExamRecord] {
        &self.exams
    }

    /// Adds an exam from raw form input and persists the list.
    pub fn add(&mut self, name: &str, date: &str) -> StoreResult<ExamAdd> {
        let name = name.trim();
        let date = date.trim();
        if name.is_empty() || date.is_empty() {
            debug!("event=exam_add module=exams status=rejected reason=blank_field");
            return Ok(ExamAdd::Rejected);
        }
        let Ok(date) = NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT) else {
            debug!("event=exam_add module=exams status=rejected reason=invalid_date");
            return Ok(ExamAdd::Rejected);
        };

        let record = ExamRecord {
            id: self.ids.next_id(),
            name: name.to_string(),
            date,
        };
        let mut next = self.exams.clone();
        next.push(record.clone());
        self.commit(next)?;

        info!(
            "event=exam_add module=exams status=ok id={} count={}",
            record.id,
            self.exams.len()
        );
        Ok(ExamAdd::Added(record))
    }

    /// Removes the exam with `id`. Returns `false` when no record matched.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let next: Vec<ExamRecord> = self
            .exams
            .iter()
            .filter(|exam| exam.id != id)
            .cloned()
            .collect();
        if next.len() == self.exams.len() {
            debug!("event=exam_remove module=exams status=not_found id={id}");
            return Ok(false);
        }
        self.commit(next)?;
        info!(
            "event=exam_remove module=exams status=ok id={id} count={}",
            self.exams.len()
        );
        Ok(true)
    }

    /// Date-sorted rows relative to `today`.
    pub fn rows(&self, today: NaiveDate) -> Vec<ExamRow> {
        let mut sorted: Vec<&ExamRecord> = self.exams.iter().collect();
        sorted.sort_by_key(|exam| exam.date);
        sorted
            .into_iter()
            .map(|exam| {
                let days = days_left(exam.date, today);
                ExamRow {
                    id: exam.id.clone(),
                    name: exam.name.clone(),
                    date_label: format_date(exam.date),
                    days_left: days,
                    countdown: countdown_label(days),
                }
            })
            .collect()
    }

    /// List markup with escaped names and `data-remove-exam` controls.
    pub fn render_html(&self, today: NaiveDate) -> String {
        let rows = self.rows(today);
        if rows.is_empty() {
            return format!(r#"<li class="empty-state">{EXAMS_EMPTY_TEXT}</li>"#);
        }
        rows.iter()
            .map(|row| {
                format!(
                    concat!(
                        r#"<li class="data-item"><div>"#,
                        r#"<p class="item-title">{name}</p>"#,
                        r#"<p class="item-subtext">{date} &bull; {countdown}</p>"#,
                        r#"</div><div class="item-actions">"#,
                        r#"<button class="btn-icon btn-danger" data-remove-exam="{id}">Delete</button>"#,
                        r#"</div></li>"#
                    ),
                    name = escape_html(&row.name),
                    date = row.date_label,
                    countdown = row.countdown,
                    id = escape_html(&row.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn commit(&mut self, next: Vec<ExamRecord>) -> StoreResult<()> {
        write_records(&self.store, EXAM_REMINDERS_KEY, &next)?;
        self.exams = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExamAdd, ExamReminders, EXAMS_EMPTY_TEXT};
    use crate::ids::SequentialIdGenerator;
    use crate::store::{KeyValueStore, MemoryKeyValueStore, EXAM_REMINDERS_KEY};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn add_rejects_blank_or_invalid_input_without_writing() {
        let store = MemoryKeyValueStore::new();
        let mut exams = ExamReminders::load(&store, SequentialIdGenerator::new());

        assert_eq!(exams.add("   ", "2025-06-10").unwrap(), ExamAdd::Rejected);
        assert_eq!(exams.add("Physics", "").unwrap(), ExamAdd::Rejected);
        assert_eq!(exams.add("Physics", "2025-02-30").unwrap(), ExamAdd::Rejected);
        assert_eq!(exams.add("Physics", "10/06/2025").unwrap(), ExamAdd::Rejected);

        assert!(exams.exams().is_empty());
        assert_eq!(store.get_item(EXAM_REMINDERS_KEY).unwrap(), None);
    }

    #[test]
    fn add_trims_name_and_assigns_fresh_ids() {
        let store = MemoryKeyValueStore::new();
        let mut exams = ExamReminders::load(&store, SequentialIdGenerator::new());

        let ExamAdd::Added(first) = exams.add("  Physics ", "2025-06-10").unwrap() else {
            panic!("physics should be added");
        };
        let ExamAdd::Added(second) = exams.add("Physics", "2025-06-10").unwrap() else {
            panic!("duplicate name should still be added");
        };
        assert_eq!(first.name, "Physics");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn rows_sort_by_date_keeping_ties_in_list_order() {
        let store = MemoryKeyValueStore::new();
        let mut exams = ExamReminders::load(&store, SequentialIdGenerator::new());
        exams.add("Chemistry", "2025-06-12").unwrap();
        exams.add("Maths", "2025-06-10").unwrap();
        exams.add("Biology", "2025-06-12").unwrap();
        exams.add("History", "2025-06-09").unwrap();

        let rows = exams.rows(date(2025, 6, 10));
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["History", "Maths", "Chemistry", "Biology"]);
        let labels: Vec<&str> = rows.iter().map(|row| row.countdown.as_str()).collect();
        assert_eq!(labels, vec!["1 day ago", "Today", "2 days left", "2 days left"]);
        assert_eq!(rows[1].date_label, "10 Jun 2025");

        let stored: Vec<&str> = exams.exams().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(stored, vec!["Chemistry", "Maths", "Biology", "History"]);
    }

    #[test]
    fn html_escapes_names_and_shows_placeholder_when_empty() {
        let store = MemoryKeyValueStore::new();
        let mut exams = ExamReminders::load(&store, SequentialIdGenerator::new());
        assert_eq!(
            exams.render_html(date(2025, 6, 1)),
            format!(r#"<li class="empty-state">{EXAMS_EMPTY_TEXT}</li>"#)
        );

        exams.add("<script>alert(1)</script>", "2025-06-04").unwrap();
        let html = exams.render_html(date(2025, 6, 1));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"data-remove-exam="1""#));
        assert!(html.contains("4 Jun 2025 &bull; 3 days left"));
    }
}
