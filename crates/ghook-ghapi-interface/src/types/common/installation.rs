use serde::{Deserialize, Serialize};

/// GitHub App installation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhInstallation {
    /// ID.
    pub id: u64,
}
