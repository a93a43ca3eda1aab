pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod runner;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Exit status after Ctrl-C, matching shell convention for SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Run the appsetup CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: an interrupted install is not resumed, so just stop
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::warning(&error::AppSetupError::Interrupted.to_string());
        exit(INTERRUPTED_EXIT_CODE);
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        if e.is_configuration_error() {
            ui::info(&format!(
                "Run '{} doctor' for details",
                project_identity::BINARY_NAME
            ));
        }
        exit(1);
    }
}
