//! Command-line surface (clap derive).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "studenthub", about = "Student utility dashboard", version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

/// Storage and logging overrides. Each flag falls back to an env var.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// SQLite database holding widget records
    #[arg(long, global = true, env = "STUDENTHUB_DB")]
    pub db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "STUDENTHUB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "STUDENTHUB_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Percentage of obtained over total marks
    Percent {
        /// Total marks
        #[arg(allow_hyphen_values = true)]
        total: Option<String>,
        /// Obtained marks
        #[arg(allow_hyphen_values = true)]
        obtained: Option<String>,
    },
    /// Interactive 25 minute countdown (start, pause, reset, quit)
    Timer,
    /// Exam date reminders
    Exams {
        #[command(subcommand)]
        action: Option<ExamAction>,
    },
    /// Saved notes
    Notes {
        #[command(subcommand)]
        action: Option<NoteAction>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExamAction {
    /// List exams by date with countdowns
    List,
    /// Add an exam (date as YYYY-MM-DD)
    Add { name: String, date: String },
    /// Remove an exam by id
    Remove { id: String },
    /// Print the list markup
    Html,
}

#[derive(Debug, Subcommand)]
pub enum NoteAction {
    /// List notes, newest first
    List,
    /// Save a new note
    Add { text: String },
    /// Replace a note's text; prompts when --text is omitted
    Edit {
        id: String,
        #[arg(long)]
        text: Option<String>,
    },
    /// Delete a note by id
    Delete { id: String },
    /// Print the list markup
    Html,
}
