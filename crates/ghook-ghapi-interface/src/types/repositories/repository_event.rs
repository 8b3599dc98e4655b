use serde::{Deserialize, Serialize};

use crate::types::{GhChanges, GhOrganization, GhRepository, GhUser};

use super::GhRepositoryAction;

/// GitHub Repository event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepositoryEvent {
    /// Action.
    pub action: GhRepositoryAction,
    /// Repository.
    pub repository: GhRepository,
    /// Changes on edition.
    pub changes: Option<GhChanges>,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Sender.
    pub sender: GhUser,
}
