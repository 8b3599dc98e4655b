use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::{GhBranch, GhLabel, GhMilestone, GhUser};

use super::GhPullRequestState;

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhPullRequest {
    /// ID.
    pub id: u64,
    /// Number.
    pub number: u64,
    /// State.
    pub state: GhPullRequestState,
    /// Locked?
    pub locked: bool,
    /// Title.
    pub title: String,
    /// Creator.
    pub user: GhUser,
    /// Body.
    pub body: Option<String>,
    /// Milestone.
    pub milestone: Option<GhMilestone>,
    /// Creation date.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Update date.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Close date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    /// Merge date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub merged_at: Option<OffsetDateTime>,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
    /// Merged?
    pub merged: Option<bool>,
    /// Mergeable?
    pub mergeable: Option<bool>,
    /// Merged by.
    pub merged_by: Option<GhUser>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    /// Draft?
    #[serde(default)]
    pub draft: bool,
}
