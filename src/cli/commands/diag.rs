use anyhow::Result;

use crate::cli::commands::{env, scan};
use crate::cli::output;
use crate::core::config::Config;
use crate::core::pattern::{Category, CompiledPattern};
use crate::core::project::Project;

/// Env audit, print scan and todo scan in one pass over the config.
/// Returns the number of lines read by the print scan.
pub fn execute(project: &Project, config: &Config) -> Result<usize> {
    let prints = CompiledPattern::compile(Category::Print, config.commands(Category::Print))?;
    let todos = CompiledPattern::compile(Category::Todo, config.commands(Category::Todo))?;

    output::print_env_header();
    let failed = env::audit(config);
    tracing::info!(failed, profiles = config.env.len(), "env audit done");

    output::print_scan_header(&Category::Print.to_string());
    let summary = scan::scan(project, &prints)?;

    output::print_scan_header(&Category::Todo.to_string());
    scan::scan(project, &todos)?;

    output::print_line_total(summary.lines);
    Ok(summary.lines)
}
