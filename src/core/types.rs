use crate::error::AppSetupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Host operating system family. Detected once per process.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Catalog key for this platform (`installCommand.<key>`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::MacOs => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = AppSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(AppSetupError::InvalidPlatform(other.to_string())),
        }
    }
}

/// Install status of one catalog entry. Always derived from a fresh check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStatus {
    Installed,
    NotInstalled,
}

impl InstallStatus {
    pub fn from_check(succeeded: bool) -> Self {
        if succeeded {
            Self::Installed
        } else {
            Self::NotInstalled
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "Installed"),
            Self::NotInstalled => write!(f, "Not Installed"),
        }
    }
}

// One line of the status table handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub name: String,
    pub status: InstallStatus,
    pub description: String,
}
