use anyhow::Result;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::matcher::LineMatcher;
use crate::core::pattern::{Category, CompiledPattern};
use crate::core::project::Project;
use crate::core::walker::{ScanSummary, TreeWalker};

pub fn execute(project: &Project, config: &Config, category: Category) -> Result<()> {
    let pattern = CompiledPattern::compile(category, config.commands(category))?;
    output::print_scan_header(&category.to_string());
    scan(project, &pattern)?;
    Ok(())
}

/// Prints every match of `pattern` under the project root.
pub fn scan(project: &Project, pattern: &CompiledPattern) -> Result<ScanSummary> {
    let matcher = LineMatcher::new(pattern);
    let summary = TreeWalker::new(&project.root, &project.ignore)
        .scan(&matcher, |m| output::print_match(&m))?;
    Ok(summary)
}
