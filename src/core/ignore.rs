use std::collections::BTreeSet;
use std::path::Path;

use crate::core::config::CONFIG_FILE_NAME;
use crate::core::error::YaspError;

pub const IGNORE_FILE_NAME: &str = ".yaspignore";

/// Names that are never walked, whatever the ignore file says.
const BUILTIN_IGNORES: &[&str] = &[IGNORE_FILE_NAME, CONFIG_FILE_NAME];

/// Literal base names skipped during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn builtin() -> Self {
        Self::from_tokens("")
    }

    /// Every whitespace-separated token becomes a member, plus the built-ins.
    pub fn from_tokens(content: &str) -> Self {
        let names = content
            .split_whitespace()
            .chain(BUILTIN_IGNORES.iter().copied())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn load(path: Option<&Path>) -> Result<Self, YaspError> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };
        let content = std::fs::read_to_string(path).map_err(|source| YaspError::IgnoreRead {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_tokens(&content);
        tracing::debug!(path = %path.display(), names = set.len(), "loaded ignore file");
        Ok(set)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
