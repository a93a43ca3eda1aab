//! Append-only audit log
//!
//! One line per event, `YYYY-MM-DD HH:MM:SS - <message>`, local time. The log is
//! never rotated or truncated here. Write failures never reach the caller: the
//! first one prints a warning, later ones are dropped silently.

use crate::error::{AppSetupError, Result};
use crate::ui;
use chrono::{Local, NaiveDateTime};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// `None` for lines that were not written by this logger.
    pub timestamp: Option<NaiveDateTime>,
    pub message: String,
}

impl LogEntry {
    pub fn parse(line: &str) -> Self {
        if let Some((stamp, message)) = line.split_once(SEPARATOR)
            && let Ok(timestamp) = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        {
            return Self {
                timestamp: Some(timestamp),
                message: message.to_string(),
            };
        }
        Self {
            timestamp: None,
            message: line.to_string(),
        }
    }
}

/// One log line. Embedded line breaks are folded into ` | ` so every event
/// stays on a single line.
pub fn format_line(timestamp: NaiveDateTime, message: &str) -> String {
    let folded = message
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}{}{}\n", timestamp.format(TIMESTAMP_FORMAT), SEPARATOR, folded)
}

#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    warned: AtomicBool,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            warned: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry stamped with the current local time.
    pub fn append(&self, message: &str) {
        let line = format_line(Local::now().naive_local(), message);
        if let Err(e) = self.write_line(&line) {
            if !self.warned.swap(true, Ordering::Relaxed) {
                ui::warning(&format!(
                    "Audit log unavailable at {}: {}. Continuing without it.",
                    self.path.display(),
                    e
                ));
            }
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;
        let written = file.write_all(line.as_bytes()).and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);
        written
    }

    /// Last `count` entries, oldest first. A missing log reads as empty.
    pub fn recent(&self, count: usize) -> Result<Vec<LogEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppSetupError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let skip = lines.len().saturating_sub(count);
        Ok(lines[skip..].iter().map(|l| LogEntry::parse(l)).collect())
    }
}
