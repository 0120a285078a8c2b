use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::error::YaspError;
use crate::core::pattern::CompiledPattern;

const TITLE_DELIMITER: &str = "! ";

/// A single matched line. Handed to the caller as soon as it is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub path: PathBuf,
    /// 1-based.
    pub line: usize,
    pub matched: String,
    /// The trimmed line.
    pub text: String,
}

impl MatchResult {
    /// `<parent dir name>/<file name>`.
    pub fn display_path(&self) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir_name = self
            .path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        match dir_name {
            Some(dir) => format!("{}/{}", dir, file_name),
            None => file_name,
        }
    }

    /// Issue title for a `TODO! Some title` line, with spaces encoded as `%20`.
    /// The title stops at a second `! `.
    pub fn issue_title(&self) -> Option<String> {
        self.text
            .split(TITLE_DELIMITER)
            .nth(1)
            .filter(|title| !title.is_empty())
            .map(|title| title.replace(' ', "%20"))
    }
}

pub struct LineMatcher<'p> {
    pattern: &'p CompiledPattern,
}

impl<'p> LineMatcher<'p> {
    pub fn new(pattern: &'p CompiledPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &CompiledPattern {
        self.pattern
    }

    /// Scans `path` line by line and returns how many lines were read.
    pub fn scan_file<F>(&self, path: &Path, mut on_match: F) -> Result<usize, YaspError>
    where
        F: FnMut(MatchResult),
    {
        let read_err = |source: std::io::Error| YaspError::FileRead {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(read_err)?);

        let mut lines = 0;
        for raw in reader.split(b'\n') {
            let raw = raw.map_err(read_err)?;
            lines += 1;
            let decoded = String::from_utf8_lossy(&raw);
            let text = decoded.trim();
            if let Some(matched) = self.pattern.find(text) {
                on_match(MatchResult {
                    path: path.to_path_buf(),
                    line: lines,
                    matched: matched.to_string(),
                    text: text.to_string(),
                });
            }
        }
        Ok(lines)
    }
}
