use serde::{Deserialize, Serialize};

/// GitHub Repository action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositoryAction {
    /// Created.
    #[default]
    Created,
    /// Deleted.
    Deleted,
    /// Archived.
    Archived,
    /// Unarchived.
    Unarchived,
    /// Edited.
    Edited,
    /// Renamed.
    Renamed,
    /// Transferred.
    Transferred,
    /// Publicized.
    Publicized,
    /// Privatized.
    Privatized,
}
