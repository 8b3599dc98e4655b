use serde::{Deserialize, Serialize};

use super::{GhEvent, GhHookConfig};

/// GitHub Hook creation request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhHookCreation {
    /// Hook name, `web` for webhooks.
    pub name: String,
    /// Deliver events on trigger?
    pub active: bool,
    /// Subscribed events.
    pub events: Vec<GhEvent>,
    /// Delivery configuration.
    pub config: GhHookConfig,
}

impl GhHookCreation {
    /// Build a standard webhook creation request.
    pub fn webhook(target_url: &str, events: Vec<GhEvent>) -> Self {
        Self {
            name: "web".into(),
            active: true,
            events,
            config: GhHookConfig {
                url: target_url.into(),
                content_type: Default::default(),
            },
        }
    }
}
