use serde::{Deserialize, Serialize};

use crate::types::{GhChanges, GhOrganization, GhRepository, GhTeam, GhUser};

use super::GhTeamAction;

/// GitHub Team event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeamEvent {
    /// Action.
    pub action: GhTeamAction,
    /// Team.
    pub team: GhTeam,
    /// Changes on edition.
    pub changes: Option<GhChanges>,
    /// Repository, if repository related.
    pub repository: Option<GhRepository>,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Sender.
    pub sender: Option<GhUser>,
}
