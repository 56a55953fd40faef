//! GitHub push-event payload model and the one-shot file reader.
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("could not find event path")]
    Unreadable(#[source] std::io::Error),
    #[error("invalid event JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The slice of a `push` webhook payload this notifier cares about.
/// Everything else in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    pub compare: String,
    pub head_commit: Option<HeadCommit>,
    pub repository: Option<Repository>,
    pub pusher: Option<Pusher>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadCommit {
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: CommitIdentity,
    pub committer: CommitIdentity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}

/// Read and parse the event payload. One attempt; the file is written once
/// by the runner before the action starts and never changes during the run.
pub async fn load(path: &Path) -> Result<PushEvent, EventError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(EventError::Unreadable)?;
    Ok(serde_json::from_str(&raw)?)
}
