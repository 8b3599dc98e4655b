use serde::{Deserialize, Serialize};

use crate::types::{GhLinks, GhUser};

/// GitHub Review comment action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewCommentAction {
    /// Created.
    #[default]
    Created,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
}

/// GitHub Review comment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReviewComment {
    /// ID.
    pub id: u64,
    /// Creator.
    pub user: GhUser,
    /// Body.
    pub body: String,
    /// Commented file path.
    pub path: Option<String>,
    /// Position in the diff.
    pub position: Option<u64>,
    /// Commented commit SHA.
    pub commit_id: Option<String>,
    /// Links.
    #[serde(rename = "_links")]
    pub links: Option<GhLinks>,
}
