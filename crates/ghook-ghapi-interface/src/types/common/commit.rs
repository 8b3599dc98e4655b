use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhCommitUser;

/// GitHub Commit.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhCommit {
    /// SHA identifier.
    pub id: Option<String>,
    /// Message.
    pub message: String,
    /// Timestamp.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Author.
    pub author: GhCommitUser,
    /// Committer.
    pub committer: GhCommitUser,
    /// Distinct from any previously pushed commit?
    pub distinct: Option<bool>,
    /// URL.
    pub url: Option<String>,
    /// Added files.
    #[serde(default)]
    pub added: Vec<String>,
    /// Removed files.
    #[serde(default)]
    pub removed: Vec<String>,
    /// Modified files.
    #[serde(default)]
    pub modified: Vec<String>,
}
