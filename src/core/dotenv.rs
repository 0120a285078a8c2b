use std::path::Path;

use crate::core::error::YaspError;

pub const DOTENV_FILE_NAME: &str = ".env";

/// `KEY=VALUE` pairs; any line that isn't exactly one `=` split is skipped.
pub fn parse(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.trim().split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) if !key.is_empty() => Some((key, value)),
                _ => None,
            }
        })
        .collect()
}

/// Exports every pair from the bootstrap file into the process environment.
pub fn load(path: &Path) -> Result<usize, YaspError> {
    let content = std::fs::read_to_string(path).map_err(|source| YaspError::DotEnvRead {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse(&content);
    for (key, value) in &pairs {
        std::env::set_var(key, value);
    }
    tracing::debug!(path = %path.display(), vars = pairs.len(), "loaded env bootstrap");
    Ok(pairs.len())
}
