use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Organization membership.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhMembership {
    /// URL.
    pub url: Option<String>,
    /// State.
    pub state: String,
    /// Role.
    pub role: String,
    /// Member.
    pub user: GhUser,
}
