//! Subcommand handlers.

use crate::args::{Command, ExamAction, NoteAction};
use crate::config::Config;
use crate::timer_session;
use anyhow::{bail, Context, Result};
use chrono::Local;
use inquire::Text;
use rusqlite::Connection;
use studenthub_core::{
    evaluate_percentage, open_db, ExamAdd, ExamReminders, KeyValueStore, NoteEdit, NotesBoard,
    SqliteKeyValueStore, UuidIdGenerator,
};

pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Percent { total, obtained } => {
            let outcome = evaluate_percentage(
                total.as_deref().unwrap_or_default(),
                obtained.as_deref().unwrap_or_default(),
            );
            println!("{outcome}");
            Ok(())
        }
        Command::Timer => timer_session::run(),
        Command::Exams { action } => {
            let conn = open_storage(config)?;
            let store = SqliteKeyValueStore::new(&conn);
            run_exams(&store, action.unwrap_or(ExamAction::List))
        }
        Command::Notes { action } => {
            let conn = open_storage(config)?;
            let store = SqliteKeyValueStore::new(&conn);
            run_notes(&store, action.unwrap_or(NoteAction::List))
        }
    }
}

fn open_storage(config: &Config) -> Result<Connection> {
    config.ensure_db_dir()?;
    open_db(&config.db_path).with_context(|| format!("cannot open `{}`", config.db_path.display()))
}

fn run_exams<S: KeyValueStore>(store: S, action: ExamAction) -> Result<()> {
    let mut exams = ExamReminders::load(store, UuidIdGenerator);
    let today = Local::now().date_naive();

    match action {
        ExamAction::List => {}
        ExamAction::Add { name, date } => match exams.add(&name, &date)? {
            ExamAdd::Added(record) => println!("added {}", record.id),
            ExamAdd::Rejected => bail!("exam needs a name and a YYYY-MM-DD date"),
        },
        ExamAction::Remove { id } => {
            if !exams.remove(&id)? {
                bail!("no exam with id `{id}`");
            }
        }
        ExamAction::Html => {
            println!("{}", exams.render_html(today));
            return Ok(());
        }
    }

    let rows = exams.rows(today);
    if rows.is_empty() {
        println!("{}", studenthub_core::widget::exams::EXAMS_EMPTY_TEXT);
    }
    for row in rows {
        println!(
            "{}  {}  {} \u{2022} {}",
            row.id, row.name, row.date_label, row.countdown
        );
    }
    Ok(())
}

fn run_notes<S: KeyValueStore>(store: S, action: NoteAction) -> Result<()> {
    let mut notes = NotesBoard::load(store, UuidIdGenerator);

    match action {
        NoteAction::List => {}
        NoteAction::Add { text } => match notes.add(&text)? {
            Some(record) => println!("added {}", record.id),
            None => bail!("note text cannot be empty"),
        },
        NoteAction::Edit { id, text } => {
            let Some(current) = notes.get(&id).map(|note| note.text.clone()) else {
                bail!("no note with id `{id}`");
            };
            let replacement = match text {
                Some(text) => Some(text),
                None => Text::new("Edit your note:")
                    .with_initial_value(&current)
                    .prompt_skippable()?,
            };
            match notes.edit(&id, replacement.as_deref())? {
                NoteEdit::Updated => println!("updated {id}"),
                NoteEdit::Cancelled => println!("edit cancelled"),
                NoteEdit::Blank => println!("empty text ignored; note unchanged"),
                NoteEdit::NotFound => bail!("no note with id `{id}`"),
            }
        }
        NoteAction::Delete { id } => {
            if !notes.delete(&id)? {
                bail!("no note with id `{id}`");
            }
        }
        NoteAction::Html => {
            println!("{}", notes.render_html());
            return Ok(());
        }
    }

    if notes.notes().is_empty() {
        println!("{}", studenthub_core::widget::notes::NOTES_EMPTY_TEXT);
    }
    for note in notes.notes() {
        println!("{}  {}", note.id, note.text);
    }
    Ok(())
}
