use anyhow::Result;

use crate::cli::output;
use crate::core::project::Project;
use crate::core::walker::TreeWalker;

pub fn execute(project: &Project) -> Result<()> {
    let lines = TreeWalker::new(&project.root, &project.ignore).render()?;
    output::print_lines(&lines);
    Ok(())
}
