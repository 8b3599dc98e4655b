use serde::{Deserialize, Serialize};

use crate::types::{GhOrganization, GhRepository, GhTeam, GhUser};

/// GitHub Team add event, sent when a repository is added to a team.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeamAddEvent {
    /// Team.
    pub team: GhTeam,
    /// Repository.
    pub repository: GhRepository,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Sender.
    pub sender: Option<GhUser>,
}
