//! Homebrew package manager (macOS)
//!
//! Bootstrapped with the official `install.sh`.

use crate::core::types::Platform;
use crate::packages::traits::PackageManager;

pub struct HomebrewManager;

impl PackageManager for HomebrewManager {
    fn name(&self) -> &'static str {
        "Homebrew"
    }

    fn binary(&self) -> &'static str {
        "brew"
    }

    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn version_command(&self) -> &'static str {
        "brew --version"
    }

    fn bootstrap_command(&self) -> Option<&'static str> {
        Some(
            "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
        )
    }
}
