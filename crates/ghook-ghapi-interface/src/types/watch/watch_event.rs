use serde::{Deserialize, Serialize};

use crate::types::{GhRepository, GhUser};

/// GitHub Watch event, `started` being the only documented action.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhWatchEvent {
    /// Action.
    pub action: String,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
