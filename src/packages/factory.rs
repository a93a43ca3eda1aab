use crate::core::types::Platform;
use crate::packages::apt::AptManager;
use crate::packages::brew::HomebrewManager;
use crate::packages::chocolatey::ChocolateyManager;
use crate::packages::traits::PackageManager;

/// Native package manager for `platform`.
pub fn for_platform(platform: Platform) -> Box<dyn PackageManager> {
    match platform {
        Platform::Windows => Box::new(ChocolateyManager),
        Platform::MacOs => Box::new(HomebrewManager),
        Platform::Linux => Box::new(AptManager),
    }
}
