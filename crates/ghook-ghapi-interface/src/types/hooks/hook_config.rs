use serde::{Deserialize, Serialize};

use super::GhHookContentType;

/// GitHub Hook delivery configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhHookConfig {
    /// Delivery URL.
    pub url: String,
    /// Payload content type.
    pub content_type: GhHookContentType,
}
