use crate::config::catalog::{self, is_yaml};
use crate::config::template;
use crate::error::{AppSetupError, Result};
use crate::project_identity;
use crate::ui as output;
use crate::utils::paths;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct InitOptions {
    pub catalog: Option<PathBuf>,
    pub force: bool,
}

/// Write a starter catalog. YAML is written when the target ends in `.yaml`/`.yml`.
pub fn run(options: InitOptions) -> Result<()> {
    output::header(&format!("Initializing {}", project_identity::BINARY_NAME));

    let catalog_file = paths::catalog_file(options.catalog.as_deref())?;

    if catalog_file.exists() && !options.force {
        output::warning("Catalog already exists.");
        output::info(&format!("Location: {}", catalog_file.display()));
        output::info("Use --force to overwrite it.");
        return Ok(());
    }

    if let Some(parent) = catalog_file.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| AppSetupError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
        output::success(&format!("Created directory: {}", parent.display()));
    }

    let starter = catalog::parse(template::default_catalog(), "template", false)?;
    let content = if is_yaml(&catalog_file) {
        starter.to_yaml()?
    } else {
        starter.to_json()?
    };

    fs::write(&catalog_file, content).map_err(|e| AppSetupError::Io {
        path: catalog_file.clone(),
        source: e,
    })?;
    output::success(&format!(
        "Created catalog with {} applications: {}",
        starter.len(),
        catalog_file.display()
    ));

    Ok(())
}
