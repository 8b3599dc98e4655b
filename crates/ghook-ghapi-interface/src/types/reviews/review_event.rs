use serde::{Deserialize, Serialize};

use crate::types::{GhChanges, GhOrganization, GhPullRequest, GhRepository, GhUser};

use super::{GhReview, GhReviewAction};

/// GitHub Pull request review event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestReviewEvent {
    /// Action.
    pub action: GhReviewAction,
    /// Review.
    pub review: GhReview,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Changes on edition.
    pub changes: Option<GhChanges>,
    /// Repository.
    pub repository: GhRepository,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Sender.
    pub sender: GhUser,
}
