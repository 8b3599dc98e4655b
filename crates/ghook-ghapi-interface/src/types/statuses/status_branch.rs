use serde::{Deserialize, Serialize};

/// Commit summary attached to a status branch.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhStatusCommit {
    /// SHA.
    pub sha: String,
    /// API URL.
    pub url: Option<String>,
}

/// Branch carrying the status commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhStatusBranch {
    /// Name.
    pub name: String,
    /// Commit.
    pub commit: GhStatusCommit,
}
