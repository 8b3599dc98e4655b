//! Constants.

/// Header where GitHub stores the event type on delivery.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
