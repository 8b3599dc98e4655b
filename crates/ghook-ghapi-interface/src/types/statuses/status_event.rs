use serde::{Deserialize, Serialize};

use crate::types::{GhRepository, GhUser};

use super::{GhCommitStatusState, GhStatusBranch};

/// GitHub Status event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhStatusEvent {
    /// Commit SHA.
    pub sha: String,
    /// State.
    pub state: GhCommitStatusState,
    /// Description.
    pub description: Option<String>,
    /// Target URL.
    pub target_url: Option<String>,
    /// Status context.
    pub context: Option<String>,
    /// Branches carrying the commit.
    #[serde(default)]
    pub branches: Vec<GhStatusBranch>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
