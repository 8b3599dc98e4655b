use serde::{Deserialize, Serialize};

use crate::types::{GhChanges, GhRepository, GhUser};

use super::{GhPullRequest, GhReviewComment, GhReviewCommentAction};

/// GitHub Pull request review comment event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestReviewCommentEvent {
    /// Action.
    pub action: GhReviewCommentAction,
    /// Changes on edition.
    pub changes: Option<GhChanges>,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Comment.
    pub comment: GhReviewComment,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
