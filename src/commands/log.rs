use crate::audit::{AuditLog, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::ui as output;
use crate::utils::paths;
use colored::Colorize;
use std::path::PathBuf;

/// Print the tail of the audit log.
pub fn run(log_file: Option<PathBuf>, lines: usize) -> Result<()> {
    let log = AuditLog::new(paths::log_file(log_file.as_deref())?);
    let entries = log.recent(lines)?;

    if entries.is_empty() {
        output::info(&format!("No log entries in {}", log.path().display()));
        return Ok(());
    }

    for entry in entries {
        match entry.timestamp {
            Some(ts) => println!(
                "{}  {}",
                ts.format(TIMESTAMP_FORMAT).to_string().dimmed(),
                entry.message
            ),
            None => println!("{}", entry.message),
        }
    }
    Ok(())
}
