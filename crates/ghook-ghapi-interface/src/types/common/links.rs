use serde::{Deserialize, Serialize};

/// GitHub Hypermedia link.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhLink {
    /// Target URL.
    pub href: String,
}

/// GitHub `_links` object.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhLinks {
    /// Canonical link.
    #[serde(rename = "self")]
    pub self_link: Option<GhLink>,
    /// HTML link.
    pub html: Option<GhLink>,
    /// Pull request link.
    pub pull_request: Option<GhLink>,
}
