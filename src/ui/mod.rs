use crate::core::types::{InstallStatus, StatusRow};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod presenter;

pub use presenter::TerminalPresenter;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);
static STDOUT_RESERVED: AtomicBool = AtomicBool::new(false);

/// Disable colour when stdout is not a terminal or `NO_COLOR` is set.
pub fn init_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed) && !is_quiet()
}

/// Keep stdout for machine output (`status --json`). Human messages move to stderr.
pub fn reserve_stdout(reserved: bool) {
    STDOUT_RESERVED.store(reserved, Ordering::Relaxed);
}

pub fn is_stdout_reserved() -> bool {
    STDOUT_RESERVED.load(Ordering::Relaxed)
}

fn emit(line: impl std::fmt::Display) {
    if is_stdout_reserved() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    emit(format!("\n{}", title.bold().underline()));
}

pub fn success(msg: &str) {
    emit(format!("{} {}", "✓".green().bold(), msg));
}

pub fn info(msg: &str) {
    if is_quiet() {
        return;
    }
    emit(format!("{} {}", "ℹ".blue().bold(), msg));
}

pub fn verbose(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "·".bright_black(), msg.dimmed());
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn separator() {
    if is_quiet() {
        return;
    }
    emit("─".repeat(60).bright_black());
}

pub fn keyval(key: &str, val: &str) {
    emit(format!("{}: {}", key.bold(), val));
}

pub fn indent(msg: &str, level: usize) {
    let spaces = " ".repeat(level * 2);
    emit(format!("{}{}", spaces, msg));
}

/// Render the status table. Column widths follow the longest cell.
pub fn status_table(rows: &[StatusRow]) {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Application".len());
    let status_width = "Not Installed".len();

    println!(
        "{}  {}  {}",
        format!("{:<name_width$}", "Application").bold(),
        format!("{:<status_width$}", "Status").bold(),
        "Description".bold(),
    );
    println!(
        "{}",
        "─".repeat(name_width + status_width + 4 + 11).bright_black()
    );

    for row in rows {
        let status = format!("{:<status_width$}", row.status.to_string());
        let status = match row.status {
            InstallStatus::Installed => status.green(),
            InstallStatus::NotInstalled => status.yellow(),
        };
        println!(
            "{:<name_width$}  {}  {}",
            row.name,
            status,
            row.description.dimmed()
        );
    }
}

/// Ask a yes/no question on stderr. Empty input and broken terminals pick `default`.
pub fn prompt_yes_no(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    eprint!("{} {} {} ", "?".yellow().bold(), question, hint);

    if let Err(e) = io::stderr().flush() {
        eprintln!("\nWarning: Failed to flush terminal: {}", e);
        return default;
    }

    let mut input = String::new();

    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            eprintln!();
            default
        }
        Ok(_) => {
            let input = input.trim().to_lowercase();

            if input.is_empty() {
                return default;
            }

            input == "y" || input == "yes"
        }
        Err(e) => {
            eprintln!("\nWarning: Failed to read input: {}", e);
            default
        }
    }
}
