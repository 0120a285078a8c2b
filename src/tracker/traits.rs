use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAuthor {
    pub username: String,
}

/// An issue as listed by the remote tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIssue {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub author: IssueAuthor,
    pub state: String,
}

#[async_trait]
pub trait IssueTracker: Send + Sync {
    fn name(&self) -> &'static str;
    /// `title` is expected to be URL-encoded already. Returns the new issue's iid.
    async fn create_issue(&self, title: &str) -> Result<u64, TrackerError>;
    async fn list_issues(&self) -> Result<Vec<RemoteIssue>, TrackerError>;
}
