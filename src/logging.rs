//! Structured logging module for Forest Guide
//!
//! Writes logs to stdout and, once initialized, to a daily file in the
//! configured directory, with categories:
//! - ROUTING: Which matching tier answered a message
//! - CONVERSATION: Session lifecycle and turns
//! - CONFIG: Configuration loading
//! - ERROR: Responder failures and other errors

use chrono::{Local, NaiveDate, Utc};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Log categories for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Routing,
    Conversation,
    Config,
    Error,
}

impl LogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Routing => "ROUTING",
            LogCategory::Conversation => "CONVERSATION",
            LogCategory::Config => "CONFIG",
            LogCategory::Error => "ERROR",
        }
    }
}

/// Directory log files go to. `None` until `init_logging` runs.
static LOG_DIR: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

const LOG_FILE_PREFIX: &str = "forest-guide-";

fn log_file_path(dir: &Path, day: NaiveDate) -> PathBuf {
    dir.join(format!("{}{}.log", LOG_FILE_PREFIX, day.format("%Y-%m-%d")))
}

/// Initialize file logging - creates the log directory if needed
pub fn init_logging(dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    if let Ok(mut guard) = LOG_DIR.lock() {
        *guard = Some(dir.to_path_buf());
    }

    log(LogCategory::Conversation, None, "Forest Guide logging initialized");

    Ok(())
}

/// Format one log line. Session ids are shortened to 8 characters.
pub fn format_line(category: LogCategory, session_id: Option<&str>, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let session_context = session_id
        .map(|id| {
            let short: String = id.chars().take(8).collect();
            format!("session={} | ", short)
        })
        .unwrap_or_default();

    format!(
        "[{}] [{}] {}{}\n",
        timestamp,
        category.as_str(),
        session_context,
        message
    )
}

/// Log a message with category and optional session context
pub fn log(category: LogCategory, session_id: Option<&str>, message: &str) {
    let log_line = format_line(category, session_id, message);

    print!("{}", log_line);

    let dir = match LOG_DIR.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => None,
    };

    if let Some(dir) = dir {
        let path = log_file_path(&dir, Local::now().date_naive());
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
            let _ = file.write_all(log_line.as_bytes());
        }
    }
}

/// Log a routing decision (which tier matched)
pub fn log_routing(session_id: Option<&str>, message: &str) {
    log(LogCategory::Routing, session_id, message);
}

/// Log a conversation lifecycle event
pub fn log_conversation(session_id: Option<&str>, message: &str) {
    log(LogCategory::Conversation, session_id, message);
}

pub fn log_config(message: &str) {
    log(LogCategory::Config, None, message);
}

/// Log an error
pub fn log_error(session_id: Option<&str>, message: &str) {
    log(LogCategory::Error, session_id, message);
}

/// Remove log files older than `keep_days`. Only files written by this
/// module are considered.
pub fn cleanup_old_logs(dir: &Path, keep_days: i64) -> Result<usize, Box<dyn Error + Send + Sync>> {
    let mut deleted = 0;

    if !dir.exists() {
        return Ok(0);
    }

    let cutoff = Utc::now() - chrono::Duration::days(keep_days);

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(LOG_FILE_PREFIX) && n.ends_with(".log"))
            .unwrap_or(false);
        if !is_ours {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                let modified_time: chrono::DateTime<Utc> = modified.into();
                if modified_time < cutoff && fs::remove_file(&path).is_ok() {
                    deleted += 1;
                }
            }
        }
    }

    Ok(deleted)
}
