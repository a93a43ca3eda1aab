/// Starter catalog written by `appsetup init`.
pub fn default_catalog() -> &'static str {
    r#"{
  "tools": [
    {
      "name": "Git",
      "description": "Distributed version control system",
      "checkCommand": "git --version",
      "installCommand": {
        "windows": "choco install git -y",
        "macos": "brew install git",
        "linux": "sudo apt-get install -y git"
      }
    },
    {
      "name": "Visual Studio Code",
      "description": "Source code editor",
      "checkCommand": "code --version",
      "installCommand": {
        "windows": "choco install vscode -y",
        "macos": "brew install --cask visual-studio-code",
        "linux": "sudo snap install code --classic"
      }
    },
    {
      "name": "Node.js",
      "description": "JavaScript runtime with npm",
      "checkCommand": "node --version",
      "installCommand": {
        "windows": "choco install nodejs-lts -y",
        "macos": "brew install node",
        "linux": "sudo apt-get install -y nodejs npm"
      }
    },
    {
      "name": "Python",
      "description": "Python 3 interpreter",
      "checkCommand": "python3 --version || python --version",
      "installCommand": {
        "windows": "choco install python -y",
        "macos": "brew install python",
        "linux": "sudo apt-get install -y python3"
      }
    },
    {
      "name": "Docker",
      "description": "Container runtime",
      "checkCommand": "docker --version",
      "installCommand": {
        "windows": "choco install docker-desktop -y",
        "macos": "brew install --cask docker",
        "linux": "sudo apt-get install -y docker.io"
      }
    },
    {
      "name": "Java JDK",
      "description": "OpenJDK development kit",
      "checkCommand": "java -version",
      "installCommand": {
        "windows": "choco install openjdk -y",
        "macos": "brew install openjdk",
        "linux": "sudo apt-get install -y default-jdk"
      }
    }
  ]
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog;
    use crate::core::types::Platform;

    #[test]
    fn starter_catalog_parses_and_covers_every_platform() {
        let catalog = catalog::parse(default_catalog(), "template", false).expect("template parses");
        assert!(!catalog.is_empty());
        for entry in catalog.entries() {
            assert_eq!(entry.install_command.platforms(), Platform::ALL.to_vec(), "{}", entry.name);
        }
    }
}
