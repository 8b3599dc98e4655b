use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
    /// Private repository?
    pub private: bool,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Default branch.
    pub default_branch: Option<String>,
}
