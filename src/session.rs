//! Per-invocation context
//!
//! A [`Session`] owns everything the engine needs that used to be ambient:
//! the platform, catalog location, command runner and audit log. Sessions are
//! independent, so tests can build as many as they like over temp dirs.

use crate::audit::AuditLog;
use crate::config::catalog::{self, Catalog};
use crate::core::reconciler::Reconciler;
use crate::core::types::Platform;
use crate::error::{AppSetupError, Result};
use crate::packages;
use crate::runner::{CommandRunner, ShellRunner};
use crate::utils::{paths, platform};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub catalog: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Platform name overriding detection.
    pub platform: Option<String>,
    pub parallel: bool,
    pub timeout: Option<Duration>,
}

/// Result of the startup package manager check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerStatus {
    Present,
    Bootstrapped,
    /// Bootstrap ran and failed; the caller decides whether to go on.
    BootstrapFailed(String),
    /// Missing, and this platform has no automated bootstrap.
    Unsupported(Platform),
}

pub struct Session {
    platform: Platform,
    catalog_path: PathBuf,
    log: AuditLog,
    runner: Box<dyn CommandRunner>,
    parallel: bool,
}

impl Session {
    pub fn open(options: &SessionOptions) -> Result<Self> {
        let platform = platform::resolve(options.platform.as_deref())?;
        let catalog_path = paths::catalog_file(options.catalog.as_deref())?;
        let log_path = paths::log_file(options.log_file.as_deref())?;

        Ok(Self::with_runner(
            platform,
            catalog_path,
            AuditLog::new(log_path),
            Box::new(ShellRunner::with_timeout(options.timeout)),
        )
        .parallel(options.parallel))
    }

    pub fn with_runner(
        platform: Platform,
        catalog_path: impl Into<PathBuf>,
        log: AuditLog,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            platform,
            catalog_path: catalog_path.into(),
            log,
            runner,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    pub fn parallel_checks(&self) -> bool {
        self.parallel
    }

    /// Record which host and platform this session runs on.
    pub fn announce(&self) {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown-host".to_string());
        self.log.append(&format!(
            "Session started on {} (platform: {})",
            host, self.platform
        ));
    }

    /// Load the catalog, writing any failure to the audit log as well.
    pub fn load_catalog(&self) -> Result<Catalog> {
        catalog::load(&self.catalog_path).inspect_err(|e| match e {
            AppSetupError::CatalogNotFound { path } => self.log.append(&format!(
                "Error: catalog file not found at {}",
                path.display()
            )),
            other => self.log.append(&format!("Error: {}", other)),
        })
    }

    /// Make sure the platform's package manager exists.
    ///
    /// `confirm` is asked before any bootstrap runs. Declining is fatal;
    /// every other outcome is reported through [`ManagerStatus`].
    pub fn ensure_package_manager(
        &self,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<ManagerStatus> {
        let manager = packages::for_platform(self.platform);
        if manager.is_present(self.runner()) {
            return Ok(ManagerStatus::Present);
        }

        if manager.bootstrap_command().is_none() {
            return match manager.bootstrap(self.runner(), &self.log) {
                Ok(()) => Ok(ManagerStatus::Bootstrapped),
                Err(AppSetupError::UnsupportedBootstrapPlatform(p)) => Ok(ManagerStatus::Unsupported(p)),
                Err(e) => Err(e),
            };
        }

        let question = format!("{} is not installed. Install it now?", manager.name());
        if !confirm(&question) {
            self.log.append(&format!(
                "{} is not installed. Installation declined; {} is required to proceed.",
                manager.name(),
                manager.name()
            ));
            return Err(AppSetupError::BootstrapDeclined {
                manager: manager.name().to_string(),
            });
        }

        match manager.bootstrap(self.runner(), &self.log) {
            Ok(()) => Ok(ManagerStatus::Bootstrapped),
            Err(AppSetupError::BootstrapFailed { reason, .. }) => Ok(ManagerStatus::BootstrapFailed(reason)),
            Err(e) => Err(e),
        }
    }

    pub fn reconciler<'a>(&'a self, catalog: &'a Catalog) -> Reconciler<'a> {
        Reconciler::new(self, catalog)
    }
}
