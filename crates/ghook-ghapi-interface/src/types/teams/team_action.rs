use serde::{Deserialize, Serialize};

/// GitHub Team action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhTeamAction {
    /// Created.
    #[default]
    Created,
    /// Deleted.
    Deleted,
    /// Edited.
    Edited,
    /// Added to repository.
    AddedToRepository,
    /// Removed from repository.
    RemovedFromRepository,
}
