//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "Application Setup Manager";
pub const BINARY_NAME: &str = "appsetup";
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORG: &str = "appsetup";
pub const CONFIG_DIR_NAME: &str = "appsetup";
pub const ENV_PREFIX: &str = "APPSETUP";
pub const CATALOG_FILE_BASENAME: &str = "applications.json";
pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_BASENAME: &str = "install_log.txt";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
