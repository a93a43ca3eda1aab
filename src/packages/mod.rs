//! # Package Manager Gateway
//!
//! One native package manager per platform:
//!
//! - **Chocolatey** (`chocolatey.rs`): Windows, bootstrapped via PowerShell
//! - **Homebrew** (`brew.rs`): macOS, bootstrapped via `install.sh`
//! - **APT** (`apt.rs`): Linux, assumed pre-installed
//!
//! Presence is a version query run through the session's `CommandRunner`, so
//! the gateway never touches the host directly and can be scripted in tests.

pub mod apt;
pub mod brew;
pub mod chocolatey;
pub mod factory;
pub mod traits;

pub use factory::for_platform;
pub use traits::PackageManager;
