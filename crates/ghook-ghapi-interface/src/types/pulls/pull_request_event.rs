use serde::{Deserialize, Serialize};

use crate::types::{GhChanges, GhInstallation, GhLabel, GhOrganization, GhRepository, GhUser};

use super::{GhPullRequest, GhPullRequestAction};

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Changes on edition.
    pub changes: Option<GhChanges>,
    /// Label, if `labeled` or `unlabeled`.
    pub label: Option<GhLabel>,
    /// Repository.
    pub repository: GhRepository,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Installation.
    pub installation: Option<GhInstallation>,
    /// Sender.
    pub sender: GhUser,
}
