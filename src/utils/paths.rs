use crate::error::{AppSetupError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| AppSetupError::PathError("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| AppSetupError::PathError(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(
        project_identity::PROJECT_QUALIFIER,
        project_identity::PROJECT_ORG,
        project_identity::CONFIG_DIR_NAME,
    )
    .ok_or_else(|| AppSetupError::PathError("Could not determine project directories".to_string()))
}

/// Read a path from `APPSETUP_<suffix>`, ignoring empty values.
fn env_path(suffix: &str) -> Option<PathBuf> {
    std::env::var_os(project_identity::env_key(suffix))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Catalog location: explicit flag, then `APPSETUP_CATALOG`, then the config dir.
pub fn catalog_file(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit.map(Path::to_path_buf).or_else(|| env_path("CATALOG")) {
        Some(path) => expand_home(&path),
        None => Ok(config_dir()?.join(project_identity::CATALOG_FILE_BASENAME)),
    }
}

/// Audit log location: explicit flag, then `APPSETUP_LOG_FILE`, then the data dir.
pub fn log_file(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit.map(Path::to_path_buf).or_else(|| env_path("LOG_FILE")) {
        Some(path) => expand_home(&path),
        None => Ok(data_dir()?
            .join(project_identity::LOG_DIR_NAME)
            .join(project_identity::LOG_FILE_BASENAME)),
    }
}
