use serde::{Deserialize, Serialize};

use crate::types::{GhHook, GhRepository, GhUser};

/// GitHub Ping event, sent when a hook is created.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPingEvent {
    /// Random zen sentence.
    pub zen: String,
    /// Hook ID.
    pub hook_id: u64,
    /// Hook.
    pub hook: Option<GhHook>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
