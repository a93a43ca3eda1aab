//! Chocolatey package manager (Windows)

use crate::core::types::Platform;
use crate::packages::traits::PackageManager;

const BOOTSTRAP: &str = concat!(
    "powershell -NoProfile -InputFormat None -ExecutionPolicy Bypass ",
    "-Command \"Set-ExecutionPolicy Bypass -Scope Process -Force; ",
    "[System.Net.ServicePointManager]::SecurityProtocol = [System.Net.SecurityProtocolType]::Tls12; ",
    "iex ((New-Object System.Net.WebClient).DownloadString('https://chocolatey.org/install.ps1'))\""
);

pub struct ChocolateyManager;

impl PackageManager for ChocolateyManager {
    fn name(&self) -> &'static str {
        "Chocolatey"
    }

    fn binary(&self) -> &'static str {
        "choco"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn version_command(&self) -> &'static str {
        "choco -v"
    }

    fn bootstrap_command(&self) -> Option<&'static str> {
        Some(BOOTSTRAP)
    }
}
