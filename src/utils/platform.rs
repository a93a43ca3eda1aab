use crate::core::types::Platform;
use crate::error::{AppSetupError, Result};
use crate::project_identity;
use std::process::Command;

/// Detect the host platform from the compile-time target OS.
pub fn detect() -> Result<Platform> {
    from_os_name(std::env::consts::OS)
}

/// Map an OS name as reported by `std::env::consts::OS`.
pub fn from_os_name(os: &str) -> Result<Platform> {
    match os {
        "windows" => Ok(Platform::Windows),
        "macos" => Ok(Platform::MacOs),
        "linux" => Ok(Platform::Linux),
        other => Err(AppSetupError::UnsupportedPlatform(other.to_string())),
    }
}

/// Pick the session platform: `--platform`, then `APPSETUP_PLATFORM`, then detection.
pub fn resolve(override_name: Option<&str>) -> Result<Platform> {
    let from_env = std::env::var(project_identity::env_key("PLATFORM")).ok();
    let chosen = override_name
        .map(str::to_string)
        .or(from_env)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    match chosen {
        Some(name) => name.parse(),
        None => detect(),
    }
}

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}
