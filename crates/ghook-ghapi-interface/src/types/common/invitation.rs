use serde::{Deserialize, Serialize};

/// GitHub Organization invitation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhInvitation {
    /// ID.
    pub id: u64,
    /// Login.
    pub login: String,
    /// Email.
    pub email: Option<String>,
    /// Role.
    pub role: String,
}
