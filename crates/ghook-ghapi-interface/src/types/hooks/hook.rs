use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{GhEvent, GhHookConfig};

/// GitHub Hook.
///
/// All fields default so an empty response body still decodes,
/// use [`GhHook::is_registered`] to tell the two apart.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhHook {
    /// ID, `0` until registered.
    pub id: u64,
    /// API URL.
    pub url: String,
    /// Test URL.
    pub test_url: String,
    /// Ping URL.
    pub ping_url: String,
    /// Name.
    pub name: String,
    /// Subscribed events.
    pub events: Vec<GhEvent>,
    /// Active?
    pub active: bool,
    /// Delivery configuration.
    pub config: GhHookConfig,
    /// Creation date.
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Update date.
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl GhHook {
    /// Whether this hook was actually registered on the remote side.
    pub fn is_registered(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::GhHook;
    use crate::types::GhEvent;

    #[test]
    fn empty_body_decodes_as_unregistered() {
        let hook: GhHook = serde_json::from_str("{}").unwrap();
        assert!(!hook.is_registered());
    }

    #[test]
    fn full_body_decodes() {
        let hook: GhHook = serde_json::from_str(
            r#"{
                "id": 12345678,
                "url": "https://api.github.com/repos/octocat/hello/hooks/12345678",
                "test_url": "https://api.github.com/repos/octocat/hello/hooks/12345678/test",
                "ping_url": "https://api.github.com/repos/octocat/hello/hooks/12345678/pings",
                "name": "web",
                "events": ["push", "pull_request"],
                "active": true,
                "config": {
                    "url": "https://example.com/webhook",
                    "content_type": "json"
                },
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2020-01-02T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert!(hook.is_registered());
        assert_eq!(hook.name, "web");
        assert_eq!(
            hook.events,
            vec![GhEvent::push(), GhEvent::pull_request()]
        );
        assert!(hook.created_at.is_some());
    }
}
