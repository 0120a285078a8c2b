use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::traits::{IssueTracker, RemoteIssue, TrackerError};

/// Records submitted titles and serves a fixed issue list.
#[derive(Default)]
pub struct RecordingTracker {
    pub created: Mutex<Vec<String>>,
    pub issues: Vec<RemoteIssue>,
    pub listed: AtomicUsize,
}

#[async_trait]
impl IssueTracker for RecordingTracker {
    fn name(&self) -> &'static str {
        "Recording"
    }

    async fn create_issue(&self, title: &str) -> Result<u64, TrackerError> {
        let mut created = self.created.lock().unwrap();
        created.push(title.to_string());
        Ok(created.len() as u64)
    }

    async fn list_issues(&self) -> Result<Vec<RemoteIssue>, TrackerError> {
        self.listed.fetch_add(1, Ordering::SeqCst);
        Ok(self.issues.clone())
    }
}
