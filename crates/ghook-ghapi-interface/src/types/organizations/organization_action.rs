use serde::{Deserialize, Serialize};

/// GitHub Organization action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhOrganizationAction {
    /// Member added.
    #[default]
    MemberAdded,
    /// Member invited.
    MemberInvited,
    /// Member removed.
    MemberRemoved,
    /// Renamed.
    Renamed,
    /// Deleted.
    Deleted,
}
