use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::YaspError;
use crate::core::ignore::IgnoreSet;
use crate::core::matcher::{LineMatcher, MatchResult};

/// Marker placed before every entry of a rendered tree.
pub const BRANCH_MARKER: &str = "|_ ";

/// One visited entry below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: PathBuf,
    pub name: String,
    /// 1 for direct children of the root.
    pub depth: usize,
    pub is_dir: bool,
}

impl Node {
    /// Two spaces per level below the first, then the branch marker.
    pub fn tree_line(&self) -> String {
        format!(
            "{}{}{}",
            "  ".repeat(self.depth.saturating_sub(1)),
            BRANCH_MARKER,
            self.name
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub lines: usize,
    pub matches: usize,
}

pub struct TreeWalker<'a> {
    root: &'a Path,
    ignore: &'a IgnoreSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &'a Path, ignore: &'a IgnoreSet) -> Self {
        Self { root, ignore }
    }

    /// Every non-ignored entry, depth-first and sorted by name.
    /// Ignored directories are never descended into.
    pub fn nodes(&self) -> Result<Vec<Node>, YaspError> {
        // Unreadable roots are reported by the walk itself.
        if std::fs::metadata(self.root).is_ok_and(|meta| !meta.is_dir()) {
            return Err(YaspError::NotADirectory {
                path: self.root.to_path_buf(),
            });
        }

        let mut nodes = Vec::new();
        for entry in WalkDir::new(self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_ignored(e))
        {
            let entry = entry.map_err(|source| YaspError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.to_path_buf()),
                source,
            })?;
            tracing::trace!(path = %entry.path().display(), depth = entry.depth(), "visit");
            nodes.push(Node {
                name: entry.file_name().to_string_lossy().into_owned(),
                depth: entry.depth(),
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            });
        }
        Ok(nodes)
    }

    /// Root name on the first line, then one indented line per entry.
    pub fn render(&self) -> Result<Vec<String>, YaspError> {
        let root_name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string());

        let mut lines = vec![root_name];
        lines.extend(self.nodes()?.iter().map(Node::tree_line));
        Ok(lines)
    }

    /// Runs `matcher` over every file, handing each match to `on_match`.
    pub fn scan<F>(&self, matcher: &LineMatcher<'_>, mut on_match: F) -> Result<ScanSummary, YaspError>
    where
        F: FnMut(MatchResult),
    {
        let mut summary = ScanSummary::default();
        for node in self.nodes()? {
            if node.is_dir {
                continue;
            }
            if !node.path.is_file() {
                tracing::debug!(path = %node.path.display(), "skipping non-regular file");
                continue;
            }
            let lines = matcher.scan_file(&node.path, |m| {
                summary.matches += 1;
                on_match(m);
            })?;
            summary.files += 1;
            summary.lines += lines;
        }
        tracing::debug!(
            category = %matcher.pattern().category(),
            files = summary.files,
            lines = summary.lines,
            matches = summary.matches,
            "scan finished"
        );
        Ok(summary)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        self.ignore.contains(&entry.file_name().to_string_lossy())
    }
}
