use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::error::YaspError;
use crate::core::ignore::IgnoreSet;

/// The directory being scanned and the names excluded from the walk.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub ignore: IgnoreSet,
}

impl Project {
    pub fn new(root: &Path, ignore: IgnoreSet) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore,
        }
    }

    /// Resolves the `-d` and `-i` flags; `""` and `"."` fall back to defaults.
    pub fn resolve(dir_flag: &str, ignore_flag: &str, config: &Config) -> Result<Self, YaspError> {
        let root = resolve_dir(dir_flag)?;
        let ignore_file = resolve_ignore_file(ignore_flag, config);
        let ignore = IgnoreSet::load(ignore_file.as_deref())?;
        tracing::info!(root = %root.display(), ignored = ignore.len(), "resolved project");
        Ok(Self::new(&root, ignore))
    }
}

fn is_default(flag: &str) -> bool {
    flag.is_empty() || flag == "."
}

pub fn resolve_dir(dir_flag: &str) -> Result<PathBuf, YaspError> {
    if is_default(dir_flag) {
        std::env::current_dir().map_err(YaspError::WorkingDir)
    } else {
        Ok(PathBuf::from(dir_flag))
    }
}

pub fn resolve_ignore_file(ignore_flag: &str, config: &Config) -> Option<PathBuf> {
    if is_default(ignore_flag) {
        config.default_ignore_file()
    } else {
        Some(PathBuf::from(ignore_flag))
    }
}
