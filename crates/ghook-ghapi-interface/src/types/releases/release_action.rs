use serde::{Deserialize, Serialize};

/// GitHub Release action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReleaseAction {
    /// Published.
    #[default]
    Published,
    /// Created.
    Created,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
    /// Prereleased.
    Prereleased,
    /// Released.
    Released,
    /// Unpublished.
    Unpublished,
}
