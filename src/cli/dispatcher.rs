//! Command dispatcher
//!
//! Routes CLI commands to their handlers. No subcommand means `status`.

use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands::{self, StartupOptions};
use crate::error::Result;
use crate::session::SessionOptions;
use std::time::Duration;

pub fn dispatch(args: &Cli) -> Result<()> {
    let options = session_options(&args.global);
    let startup = StartupOptions {
        yes: args.global.yes,
        skip_bootstrap_check: args.global.skip_bootstrap_check,
    };

    match &args.command {
        None => commands::status::run(&options, startup, false),

        Some(Command::Status { json }) => commands::status::run(&options, startup, *json),

        Some(Command::Install { names, missing }) => commands::install::run(
            &options,
            startup,
            commands::install::InstallOptions {
                names: names.clone(),
                missing: *missing,
            },
        ),

        Some(Command::Doctor) => commands::doctor::run(&options),

        Some(Command::Init { force }) => commands::init::run(commands::init::InitOptions {
            catalog: args.global.catalog.clone(),
            force: *force,
        }),

        Some(Command::Log { lines }) => commands::log::run(args.global.log_file.clone(), *lines),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),
    }
}

fn session_options(global: &GlobalFlags) -> SessionOptions {
    SessionOptions {
        catalog: global.catalog.clone(),
        log_file: global.log_file.clone(),
        platform: global.platform.clone(),
        parallel: global.parallel,
        timeout: global.timeout.filter(|secs| *secs > 0).map(Duration::from_secs),
    }
}
