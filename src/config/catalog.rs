//! Catalog of managed applications
//!
//! ```json
//! { "tools": [ { "name": "Git", "description": "...", "checkCommand": "git --version",
//!                "installCommand": { "windows": "choco install git -y" } } ] }
//! ```
//!
//! `.yaml`/`.yml` files carry the same shape.

use crate::core::types::Platform;
use crate::error::{AppSetupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Install command per platform. Unknown platform keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallCommands {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
}

impl InstallCommands {
    /// Command for `platform`, treating blank entries as absent.
    pub fn for_platform(&self, platform: Platform) -> Option<&str> {
        let command = match platform {
            Platform::Windows => self.windows.as_deref(),
            Platform::MacOs => self.macos.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        };
        command.map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.for_platform(*p).is_some())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub check_command: String,
    #[serde(default)]
    pub install_command: InstallCommands,
}

#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    tools: Vec<ApplicationDescriptor>,
}

/// Ordered, read-only list of descriptors with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ApplicationDescriptor>,
}

impl Catalog {
    fn validated(entries: Vec<ApplicationDescriptor>, file: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(AppSetupError::DuplicateApplication {
                    file: file.to_string(),
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ApplicationDescriptor] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&ApplicationDescriptor> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            tools: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let file = CatalogFile {
            tools: self.entries.clone(),
        };
        serde_yml::to_string(&file).map_err(|e| AppSetupError::Other(format!("Failed to encode catalog: {}", e)))
    }
}

/// Catalog files ending in `.yaml` or `.yml` are read as YAML.
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

/// Parse catalog text. `file` only labels errors.
pub fn parse(content: &str, file: &str, yaml: bool) -> Result<Catalog> {
    let parsed: std::result::Result<CatalogFile, String> = if yaml {
        serde_yml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    let parsed = parsed.map_err(|message| AppSetupError::CatalogParse {
        file: file.to_string(),
        message,
    })?;

    Catalog::validated(parsed.tools, file)
}

pub fn load(path: &Path) -> Result<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppSetupError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(AppSetupError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    parse(&content, &path.display().to_string(), is_yaml(path))
}
