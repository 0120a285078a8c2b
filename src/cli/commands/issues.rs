use anyhow::Result;

use crate::cli::output;
use crate::tracker::IssueTracker;

pub async fn execute(tracker: &dyn IssueTracker) -> Result<()> {
    let lines = listing(tracker).await?;
    output::print_issues_header(tracker.name());
    output::print_lines(&lines);
    Ok(())
}

/// Fetches the tracker's issues and renders them for the terminal.
pub async fn listing(tracker: &dyn IssueTracker) -> Result<Vec<String>> {
    let issues = tracker.list_issues().await?;
    tracing::debug!(tracker = tracker.name(), count = issues.len(), "listed issues");
    Ok(output::issue_listing(&issues))
}
