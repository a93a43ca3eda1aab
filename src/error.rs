use crate::core::types::Platform;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppSetupError {
    #[error("Catalog file not found at: {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("Parsing error in '{file}': {message}")]
    CatalogParse { file: String, message: String },

    #[error("Duplicate application '{name}' in catalog '{file}'")]
    DuplicateApplication { file: String, name: String },

    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Unsupported host platform '{0}'. Use --platform to choose windows, macos or linux")]
    UnsupportedPlatform(String),

    #[error("Unknown platform '{0}'. Expected one of: windows, macos, linux")]
    InvalidPlatform(String),

    #[error("Package manager installation is only automated for Windows and macOS (current: {0})")]
    UnsupportedBootstrapPlatform(Platform),

    #[error("{manager} is required to proceed.")]
    BootstrapDeclined { manager: String },

    #[error("{manager} bootstrap failed: {reason}")]
    BootstrapFailed { manager: String, reason: String },

    #[error("No install command available for {name} on {platform}")]
    MissingInstallCommand { name: String, platform: Platform },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppSetupError>;

impl AppSetupError {
    /// Errors that come from the catalog itself rather than the host.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::CatalogNotFound { .. } | Self::CatalogParse { .. } | Self::DuplicateApplication { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_install_command_names_platform() {
        let err = AppSetupError::MissingInstallCommand {
            name: "Git".to_string(),
            platform: Platform::MacOs,
        };
        assert_eq!(err.to_string(), "No install command available for Git on macOS");
    }

    #[test]
    fn catalog_errors_are_configuration_errors() {
        let err = AppSetupError::CatalogNotFound {
            path: PathBuf::from("/nowhere/applications.json"),
        };
        assert!(err.is_configuration_error());
        assert!(!AppSetupError::Interrupted.is_configuration_error());
    }
}
