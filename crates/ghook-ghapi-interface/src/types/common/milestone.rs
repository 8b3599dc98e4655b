use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhUser;

/// GitHub Milestone state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhMilestoneState {
    /// Open.
    #[default]
    Open,
    /// Closed.
    Closed,
}

/// GitHub Milestone.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhMilestone {
    /// ID.
    pub id: u64,
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// State.
    pub state: GhMilestoneState,
    /// Open issues count.
    pub open_issues: u64,
    /// Closed issues count.
    pub closed_issues: u64,
    /// Creator.
    pub creator: Option<GhUser>,
    /// Due date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_on: Option<OffsetDateTime>,
}
