use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::env_audit::EnvProfile;
use crate::core::error::YaspError;
use crate::core::pattern::Category;

pub const CONFIG_FILE_NAME: &str = "yasp.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignore: IgnoreConfig,
    pub print: CommandList,
    pub todos: CommandList,
    pub issues: CommandList,
    /// Profiles keyed by name, audited in name order.
    pub env: BTreeMap<String, EnvProfile>,
}

/// Location of the default ignore file, used when `-i` is empty or `.`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    pub path: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandList {
    pub commands: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, YaspError> {
        let content = std::fs::read_to_string(path).map_err(|source| YaspError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| YaspError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            profiles = config.env.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn commands(&self, category: Category) -> &str {
        match category {
            Category::Print => &self.print.commands,
            Category::Todo => &self.todos.commands,
            Category::Issue => &self.issues.commands,
        }
    }

    /// `<ignore.path>/<ignore.file>`, or `None` when both are blank.
    pub fn default_ignore_file(&self) -> Option<PathBuf> {
        let joined = Path::new(&self.ignore.path).join(&self.ignore.file);
        if joined.as_os_str().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
