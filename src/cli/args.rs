use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "appsetup",
    about = "Check and install a catalog of applications",
    long_about = "Declarative application setup: checks which catalog applications are installed \
                  and installs the ones you pick with the native package manager",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Catalog file (default: config dir, or APPSETUP_CATALOG)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Audit log file (default: data dir, or APPSETUP_LOG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override platform detection (windows, macos, linux)
    #[arg(long, global = true, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Do not check for the native package manager at startup
    #[arg(long, global = true)]
    pub skip_bootstrap_check: bool,

    /// Run check commands concurrently
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Kill commands that run longer than this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every catalog application and show its status
    Status {
        /// Print the status table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install applications, then refresh every status
    Install {
        /// Application names, installed in the given order
        names: Vec<String>,

        /// Install every application that is not installed yet
        #[arg(long, conflicts_with = "names")]
        missing: bool,
    },

    /// Show platform, package manager and catalog diagnostics
    Doctor,

    /// Write a starter catalog
    Init {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
