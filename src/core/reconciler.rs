//! Reconciliation engine
//!
//! Compares the catalog against the host by running check commands, and
//! installs selected entries one at a time in the order they were given.
//!
//! Status is never cached: every check pass reruns every check command, and an
//! install batch always ends with a full pass over the whole catalog.

use crate::audit::AuditLog;
use crate::config::catalog::{ApplicationDescriptor, Catalog};
use crate::core::presenter::{EngineState, Notice, Presenter};
use crate::core::types::{InstallStatus, Platform, StatusRow};
use crate::error::{AppSetupError, Result};
use crate::runner::CommandRunner;
use crate::session::Session;
use rayon::prelude::*;

/// What happened to one selected name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Installed,
    Failed { stderr: String },
    MissingInstallCommand,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub name: String,
    pub outcome: ItemOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// In selection order.
    pub outcomes: Vec<InstallOutcome>,
    /// Status table from the refresh pass after the batch.
    pub statuses: Vec<StatusRow>,
}

impl InstallReport {
    pub fn installed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == ItemOutcome::Installed)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.installed_count()
    }
}

/// Install command of `descriptor` for `platform`.
pub fn install_command_for(descriptor: &ApplicationDescriptor, platform: Platform) -> Result<&str> {
    descriptor
        .install_command
        .for_platform(platform)
        .ok_or_else(|| AppSetupError::MissingInstallCommand {
            name: descriptor.name.clone(),
            platform,
        })
}

pub struct Reconciler<'a> {
    catalog: &'a Catalog,
    platform: Platform,
    runner: &'a dyn CommandRunner,
    log: &'a AuditLog,
    parallel: bool,
    state: EngineState,
}

impl<'a> Reconciler<'a> {
    pub fn new(session: &'a Session, catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            platform: session.platform(),
            runner: session.runner(),
            log: session.log(),
            parallel: session.parallel_checks(),
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    fn transition(&mut self, state: EngineState, presenter: &mut dyn Presenter) {
        self.state = state;
        presenter.state_changed(state);
    }

    /// Run every check command and render the resulting table.
    pub fn check_all(&mut self, presenter: &mut dyn Presenter) -> Vec<StatusRow> {
        let rows = self.run_checks(presenter);
        presenter.render_status(&rows);
        rows
    }

    fn run_checks(&mut self, presenter: &mut dyn Presenter) -> Vec<StatusRow> {
        self.transition(EngineState::Checking, presenter);

        let catalog = self.catalog;
        let entries = catalog.entries();
        let runner = self.runner;
        let results: Vec<bool> = if self.parallel && entries.len() > 1 {
            entries
                .par_iter()
                .map(|e| runner.run(&e.check_command).succeeded)
                .collect()
        } else {
            entries
                .iter()
                .map(|e| runner.run(&e.check_command).succeeded)
                .collect()
        };

        // Log after collecting so entries keep catalog order even for parallel checks.
        let rows: Vec<StatusRow> = entries
            .iter()
            .zip(results)
            .map(|(entry, succeeded)| {
                let status = InstallStatus::from_check(succeeded);
                self.log.append(&format!(
                    "Checked application: {} - Status: {}",
                    entry.name, status
                ));
                StatusRow {
                    name: entry.name.clone(),
                    status,
                    description: entry.description.clone(),
                }
            })
            .collect();

        self.transition(EngineState::Idle, presenter);
        rows
    }

    /// Install `selection` in order, then refresh every status.
    ///
    /// Per-item failures are reported to the presenter and the log as they
    /// happen and never stop the batch. An empty selection does nothing.
    pub fn install(&mut self, selection: &[String], presenter: &mut dyn Presenter) -> InstallReport {
        if selection.is_empty() {
            presenter.notify(Notice::info(
                "No Selection",
                "Please select applications to install.",
            ));
            return InstallReport::default();
        }

        self.transition(EngineState::Installing, presenter);

        let outcomes = selection
            .iter()
            .map(|name| InstallOutcome {
                name: name.clone(),
                outcome: self.install_one(name, presenter),
            })
            .collect();

        let statuses = self.check_all(presenter);
        InstallReport { outcomes, statuses }
    }

    /// Install everything currently not installed, in catalog order.
    pub fn install_missing(&mut self, presenter: &mut dyn Presenter) -> InstallReport {
        let rows = self.run_checks(presenter);
        let missing: Vec<String> = rows
            .iter()
            .filter(|r| !r.status.is_installed())
            .map(|r| r.name.clone())
            .collect();

        if missing.is_empty() {
            presenter.notify(Notice::info(
                "Nothing To Install",
                "All applications are already installed.",
            ));
            presenter.render_status(&rows);
            return InstallReport {
                outcomes: Vec::new(),
                statuses: rows,
            };
        }

        self.install(&missing, presenter)
    }

    fn install_one(&self, name: &str, presenter: &mut dyn Presenter) -> ItemOutcome {
        let Some(descriptor) = self.catalog.get(name) else {
            self.log.append(&format!("Skipped unknown application: {}", name));
            presenter.notify(Notice::warning(
                "Unknown Application",
                format!("Unknown application: {}", name),
            ));
            return ItemOutcome::Unknown;
        };

        let command = match install_command_for(descriptor, self.platform) {
            Ok(command) => command,
            Err(e) => {
                self.log.append(&format!("Error: {}", e));
                presenter.notify(Notice::error("Error", e.to_string()));
                return ItemOutcome::MissingInstallCommand;
            }
        };

        presenter.install_started(name);
        self.log.append(&format!("Installing {}...", name));

        let result = self.runner.run(command);
        if result.succeeded {
            let message = format!("{} installed successfully.", name);
            self.log.append(&message);
            presenter.notify(Notice::success("Installation Status", message));
            ItemOutcome::Installed
        } else {
            let message = format!("Error installing {}: {}", name, result.stderr);
            self.log.append(&message);
            presenter.notify(Notice::error("Installation Status", message));
            ItemOutcome::Failed {
                stderr: result.stderr,
            }
        }
    }
}

#[cfg(test)]
mod tests;
