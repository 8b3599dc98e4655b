use serde::{Deserialize, Serialize};

use crate::types::{GhRepository, GhUser};

use super::{GhRelease, GhReleaseAction};

/// GitHub Release event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReleaseEvent {
    /// Action.
    pub action: GhReleaseAction,
    /// Release.
    pub release: GhRelease,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
