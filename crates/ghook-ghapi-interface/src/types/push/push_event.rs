use serde::{Deserialize, Serialize};

use crate::types::{GhCommit, GhCommitUser, GhRepository, GhUser};

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Pushed reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Head commit SHA.
    pub head: String,
    /// Commit SHA before the push.
    pub before: String,
    /// Pushed commit count.
    #[serde(rename = "size", default)]
    pub commit_count: u64,
    /// Distinct pushed commit count.
    #[serde(rename = "distinct_size", default)]
    pub distinct_commit_count: u64,
    /// Commits.
    #[serde(default)]
    pub commits: Vec<GhCommit>,
    /// Head commit.
    pub head_commit: Option<GhCommit>,
    /// Repository.
    pub repository: GhRepository,
    /// Pusher.
    pub pusher: GhCommitUser,
    /// Sender.
    pub sender: Option<GhUser>,
}
