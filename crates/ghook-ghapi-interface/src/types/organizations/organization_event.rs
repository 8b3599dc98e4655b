use serde::{Deserialize, Serialize};

use crate::types::{GhInvitation, GhMembership, GhOrganization, GhUser};

use super::GhOrganizationAction;

/// GitHub Organization event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganizationEvent {
    /// Action.
    pub action: GhOrganizationAction,
    /// Invitation, if `member_invited`.
    pub invitation: Option<GhInvitation>,
    /// Membership, if member related.
    pub membership: Option<GhMembership>,
    /// Organization.
    pub organization: Option<GhOrganization>,
    /// Sender.
    pub sender: Option<GhUser>,
}
