use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::GhUser;

/// GitHub Release.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRelease {
    /// ID.
    pub id: u64,
    /// Tag name.
    pub tag_name: String,
    /// Target commitish.
    pub target_commitish: String,
    /// Name.
    pub name: Option<String>,
    /// Draft?
    pub draft: bool,
    /// Prerelease?
    pub prerelease: bool,
    /// Author.
    pub author: Option<GhUser>,
    /// Creation date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Publication date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    /// Tarball URL.
    pub tarball_url: Option<String>,
    /// Zipball URL.
    pub zipball_url: Option<String>,
    /// Body.
    pub body: Option<String>,
}
