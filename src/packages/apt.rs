use crate::core::types::Platform;
use crate::packages::traits::PackageManager;

// Assumed to ship with the distribution, so there is no bootstrap command.
pub struct AptManager;

impl PackageManager for AptManager {
    fn name(&self) -> &'static str {
        "APT"
    }

    fn binary(&self) -> &'static str {
        "apt"
    }

    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn version_command(&self) -> &'static str {
        "apt --version"
    }
}
