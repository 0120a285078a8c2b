use colored::*;

use crate::core::env_audit::AuditOutcome;
use crate::core::matcher::MatchResult;
use crate::tracker::RemoteIssue;

pub fn print_scan_header(keyword: &str) {
    println!();
    println!("I found these {} statements in the code:", keyword.magenta());
}

pub fn print_env_header() {
    println!();
    println!("Checking {} files and variables...", "env".magenta());
}

pub fn print_snitch_header() {
    println!();
    println!("Reporting these unreported issues:");
}

pub fn print_issues_header(tracker: &str) {
    println!();
    println!("Current {} issues:", tracker);
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// `<dir>/<file> <line> <text>` with every occurrence of the match highlighted.
pub fn format_match(result: &MatchResult) -> String {
    let highlighted = result
        .text
        .replace(&result.matched, &result.matched.magenta().to_string());
    format!("{} {} {}", result.display_path(), result.line, highlighted)
}

pub fn print_match(result: &MatchResult) {
    println!("{}", format_match(result));
}

pub fn audit_lines(profile: &str, outcome: &AuditOutcome) -> Vec<String> {
    match outcome {
        AuditOutcome::Complete => vec![format!("{} env files seem ok.", profile)],
        AuditOutcome::FileNotFound { path } => {
            vec![format!("Can't find the env file at {}", path.display())]
        }
        AuditOutcome::MissingVars { path, missing } => missing
            .iter()
            .map(|var| format!("Can't find the variable {} in the {} file", var, path.display()))
            .collect(),
    }
}

pub fn print_audit(profile: &str, outcome: &AuditOutcome) {
    for line in audit_lines(profile, outcome) {
        println!("{}", line);
    }
}

pub fn issue_lines(issue: &RemoteIssue) -> Vec<String> {
    vec![
        format!("Id:  {}", issue.id),
        format!("Iid:  {}", issue.iid),
        format!("Title:  {}", issue.title),
        format!("Description:  {}", issue.description.as_deref().unwrap_or_default()),
        format!("Author:  {}", issue.author.username),
        format!("State:  {}", issue.state),
    ]
}

/// Each issue's fields, preceded by a blank line.
pub fn issue_listing(issues: &[RemoteIssue]) -> Vec<String> {
    issues
        .iter()
        .flat_map(|issue| std::iter::once(String::new()).chain(issue_lines(issue)))
        .collect()
}


pub fn print_line_total(lines: usize) {
    println!();
    println!("For this diagnosis I went through {} lines of code.", lines);
}
