pub mod gitlab;
pub mod traits;

#[cfg(test)]
pub mod mock;

pub use gitlab::{GitLabClient, TrackerConfig};
pub use traits::{IssueTracker, RemoteIssue};
