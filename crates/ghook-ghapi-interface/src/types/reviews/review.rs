use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::{GhLinks, GhUser};

use super::GhReviewState;

/// GitHub Review.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhReview {
    /// ID.
    pub id: u64,
    /// Reviewer.
    pub user: GhUser,
    /// Body.
    pub body: Option<String>,
    /// Submission date.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    /// State.
    pub state: GhReviewState,
    /// HTML URL.
    pub html_url: Option<String>,
    /// Links.
    #[serde(rename = "_links")]
    pub links: Option<GhLinks>,
}
