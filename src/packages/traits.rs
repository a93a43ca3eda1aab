use crate::audit::AuditLog;
use crate::core::types::Platform;
use crate::error::{AppSetupError, Result};
use crate::runner::CommandRunner;
use std::path::PathBuf;

/// Native package manager of one platform.
///
/// Implementations only describe their commands; probing and bootstrapping
/// are shared default methods so every manager logs the same way.
pub trait PackageManager: Send + Sync {
    /// Display name, e.g. "Chocolatey".
    fn name(&self) -> &'static str;

    /// Executable looked up on PATH by diagnostics.
    fn binary(&self) -> &'static str;

    fn platform(&self) -> Platform;

    /// Cheap command that succeeds only when the manager is installed.
    fn version_command(&self) -> &'static str;

    /// Command that installs the manager itself. `None` when unsupported.
    fn bootstrap_command(&self) -> Option<&'static str> {
        None
    }

    fn is_present(&self, runner: &dyn CommandRunner) -> bool {
        runner.run(self.version_command()).succeeded
    }

    /// First line of the version query, if the manager answers.
    fn version(&self, runner: &dyn CommandRunner) -> Option<String> {
        let result = runner.run(self.version_command());
        if !result.succeeded {
            return None;
        }
        result.stdout.lines().next().map(|l| l.trim().to_string())
    }

    fn binary_path(&self) -> Option<PathBuf> {
        which::which(self.binary()).ok()
    }

    /// Install the manager. Only call after the user confirmed.
    fn bootstrap(&self, runner: &dyn CommandRunner, log: &AuditLog) -> Result<()> {
        let Some(command) = self.bootstrap_command() else {
            log.append(&format!(
                "Package manager not supported for automatic installation on {}.",
                self.platform()
            ));
            return Err(AppSetupError::UnsupportedBootstrapPlatform(self.platform()));
        };

        log.append(&format!(
            "{} is not installed. Installing {}...",
            self.name(),
            self.name()
        ));

        let result = runner.run(command);
        if result.succeeded {
            log.append(&format!("{} installed successfully.", self.name()));
            Ok(())
        } else {
            log.append(&format!("Error installing {}: {}", self.name(), result.stderr));
            Err(AppSetupError::BootstrapFailed {
                manager: self.name().to_string(),
                reason: result.stderr,
            })
        }
    }
}
