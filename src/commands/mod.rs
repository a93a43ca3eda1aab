pub mod completions;
pub mod doctor;
pub mod init;
pub mod install;
pub mod log;
pub mod status;

use crate::config::catalog::Catalog;
use crate::error::{AppSetupError, Result};
use crate::packages;
use crate::session::{ManagerStatus, Session, SessionOptions};
use crate::ui as output;

/// How the startup package manager check should behave.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions {
    /// Answer yes to the bootstrap prompt.
    pub yes: bool,
    pub skip_bootstrap_check: bool,
}

/// Open a session, make sure the package manager exists, then load the catalog.
pub fn start_session(options: &SessionOptions, startup: StartupOptions) -> Result<(Session, Catalog)> {
    let session = Session::open(options)?;
    session.announce();
    output::verbose(&format!("Detected operating system: {}", session.platform()));
    output::verbose(&format!("Catalog: {}", session.catalog_path().display()));
    output::verbose(&format!("Audit log: {}", session.log().path().display()));

    if !startup.skip_bootstrap_check {
        check_package_manager(&session, startup.yes)?;
    }

    let catalog = session.load_catalog()?;
    Ok((session, catalog))
}

fn check_package_manager(session: &Session, yes: bool) -> Result<()> {
    let manager = packages::for_platform(session.platform());
    let status = session.ensure_package_manager(|question| {
        if yes {
            output::info(&format!("{} (--yes)", question));
            return true;
        }
        output::prompt_yes_no(question, false)
    })?;

    match status {
        ManagerStatus::Present => {
            output::verbose(&format!("{} is available", manager.name()));
        }
        ManagerStatus::Bootstrapped => {
            output::success(&format!("{} installed successfully.", manager.name()));
        }
        ManagerStatus::BootstrapFailed(reason) => {
            output::error(&format!("Error installing {}: {}", manager.name(), reason));
            output::warning("Continuing; installs may fail until the package manager is available.");
        }
        ManagerStatus::Unsupported(platform) => {
            output::warning(&format!(
                "{} was not found. {}",
                manager.name(),
                AppSetupError::UnsupportedBootstrapPlatform(platform)
            ));
        }
    }
    Ok(())
}
