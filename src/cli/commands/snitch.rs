use anyhow::Result;

use crate::cli::output;
use crate::cli::progress::SubmitProgress;
use crate::core::config::Config;
use crate::core::matcher::LineMatcher;
use crate::core::pattern::{Category, CompiledPattern};
use crate::core::project::Project;
use crate::core::walker::TreeWalker;
use crate::tracker::IssueTracker;

pub async fn execute(project: &Project, config: &Config, tracker: &dyn IssueTracker) -> Result<()> {
    let pattern = CompiledPattern::compile(Category::Issue, config.commands(Category::Issue))?;
    output::print_snitch_header();
    let created = report(project, &pattern, tracker).await?;
    tracing::info!(count = created.len(), tracker = tracker.name(), "issues reported");
    Ok(())
}

/// Prints every issue-category match and files one remote issue per titled match.
///
/// Nothing is remembered between runs, so a TODO is filed again every time.
pub async fn report(
    project: &Project,
    pattern: &CompiledPattern,
    tracker: &dyn IssueTracker,
) -> Result<Vec<u64>> {
    let matcher = LineMatcher::new(pattern);
    let mut titles = Vec::new();
    TreeWalker::new(&project.root, &project.ignore).scan(&matcher, |m| {
        output::print_match(&m);
        match m.issue_title() {
            Some(title) => titles.push(title),
            None => tracing::warn!(
                path = %m.path.display(),
                line = m.line,
                "no `! ` title on matched line, not reporting"
            ),
        }
    })?;

    let progress = SubmitProgress::new(titles.len());
    let result = submit(&titles, tracker, &progress).await;
    progress.finish();
    result
}

async fn submit(
    titles: &[String],
    tracker: &dyn IssueTracker,
    progress: &SubmitProgress,
) -> Result<Vec<u64>> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        progress.set_title(title);
        created.push(tracker.create_issue(title).await?);
        progress.inc();
    }
    Ok(created)
}
