//! Doctor Command
//!
//! Read-only health report: host, package manager, catalog and audit log.
//! Never bootstraps or installs anything.

use crate::config::catalog;
use crate::error::{AppSetupError, Result};
use crate::packages;
use crate::project_identity;
use crate::session::{Session, SessionOptions};
use crate::ui as output;

pub fn run(options: &SessionOptions) -> Result<()> {
    output::header("System Diagnosis");
    let mut all_ok = true;

    let session = Session::open(options)?;
    output::info(&format!(
        "OS/Arch: {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    ));
    output::keyval("Platform", &session.platform().to_string());
    output::separator();

    output::info("Checking package manager...");
    let manager = packages::for_platform(session.platform());
    match manager.version(session.runner()) {
        Some(version) => {
            output::success(&format!("{} found: {}", manager.name(), version));
            if let Some(path) = manager.binary_path() {
                output::indent(&format!("• Path: {}", path.display()), 2);
            }
        }
        None => {
            output::warning(&format!("{} not found", manager.name()));
            if manager.bootstrap_command().is_some() {
                output::info(&format!(
                    "Run '{} status' to install it",
                    project_identity::BINARY_NAME
                ));
            } else {
                output::info("Install it manually; this platform has no automatic setup.");
            }
            all_ok = false;
        }
    }

    output::info("Checking catalog...");
    let catalog_path = session.catalog_path();
    output::indent(&format!("• Catalog: {}", catalog_path.display()), 2);
    match catalog::load(catalog_path) {
        Ok(catalog) => {
            output::success(&format!(
                "Catalog valid: {} applications defined",
                catalog.len()
            ));

            let uncovered: Vec<&str> = catalog
                .entries()
                .iter()
                .filter(|d| d.install_command.for_platform(session.platform()).is_none())
                .map(|d| d.name.as_str())
                .collect();
            if uncovered.is_empty() {
                output::success(&format!(
                    "Every application has an install command for {}",
                    session.platform()
                ));
            } else {
                output::warning(&format!(
                    "{} application(s) cannot be installed on {}:",
                    uncovered.len(),
                    session.platform()
                ));
                for name in uncovered {
                    output::indent(&format!("• {}", name), 2);
                }
            }
        }
        Err(AppSetupError::CatalogNotFound { .. }) => {
            output::error("Catalog not found");
            output::info(&format!(
                "Run '{} init' to create one",
                project_identity::BINARY_NAME
            ));
            all_ok = false;
        }
        Err(e) => {
            output::error(&format!("Catalog error: {}", e));
            all_ok = false;
        }
    }

    output::info("Checking audit log...");
    output::indent(&format!("• Log file: {}", session.log().path().display()), 2);
    match session.log().recent(1) {
        Ok(entries) if entries.is_empty() => output::info("Log is empty"),
        Ok(_) => output::success("Log readable"),
        Err(e) => {
            output::warning(&format!("Log unreadable: {}", e));
            all_ok = false;
        }
    }

    output::separator();
    if all_ok {
        output::success("All checks passed");
    } else {
        output::warning("Some checks need attention");
    }
    Ok(())
}
