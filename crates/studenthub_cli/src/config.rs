//! Resolved runtime configuration.
//!
//! Flags and env vars win; otherwise everything lives under the user's
//! data directory.

use crate::args::Settings;
use anyhow::{Context, Result};
use std::path::PathBuf;
use studenthub_core::default_log_level;

const APP_DIR_NAME: &str = "studenthub";
const DB_FILE_NAME: &str = "studenthub.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn resolve(settings: Settings) -> Result<Self> {
        let app_dir = match (&settings.db, &settings.log_dir) {
            (Some(_), Some(_)) => None,
            _ => Some(default_app_dir()?),
        };
        let db_path = match settings.db {
            Some(path) => path,
            None => app_dir_join(&app_dir, DB_FILE_NAME)?,
        };
        let log_dir = match settings.log_dir {
            Some(path) => path,
            None => app_dir_join(&app_dir, LOG_DIR_NAME)?,
        };
        let log_dir = std::path::absolute(&log_dir)
            .with_context(|| format!("cannot resolve log dir `{}`", log_dir.display()))?;
        let log_level = settings
            .log_level
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }

    /// Creates the database's parent directory if needed.
    pub fn ensure_db_dir(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create `{}`", parent.display()))?;
        }
        Ok(())
    }
}

fn default_app_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("no local data directory for this platform")?;
    Ok(base.join(APP_DIR_NAME))
}

fn app_dir_join(app_dir: &Option<PathBuf>, name: &str) -> Result<PathBuf> {
    app_dir
        .as_ref()
        .map(|dir| dir.join(name))
        .context("data directory not resolved")
}
