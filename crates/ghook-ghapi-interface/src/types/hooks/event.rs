use std::fmt;

use serde::{Deserialize, Serialize};

/// GitHub Event name.
///
/// Kept as an open string so callers can subscribe to event names
/// introduced after this crate was written.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GhEvent(String);

impl GhEvent {
    /// Create a new event name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The `push` event.
    pub fn push() -> Self {
        Self::new("push")
    }

    /// The `issues` event.
    pub fn issues() -> Self {
        Self::new("issues")
    }

    /// The `pull_request` event.
    pub fn pull_request() -> Self {
        Self::new("pull_request")
    }

    /// Event name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GhEvent {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for GhEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::GhEvent;

    #[test]
    fn well_known_names() {
        assert_eq!(GhEvent::push().as_str(), "push");
        assert_eq!(GhEvent::issues().as_str(), "issues");
        assert_eq!(GhEvent::pull_request().as_str(), "pull_request");
    }

    #[test]
    fn serialize_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&GhEvent::push()).unwrap(),
            r#""push""#
        );
        assert_eq!(
            serde_json::from_str::<GhEvent>(r#""workflow_run""#).unwrap(),
            GhEvent::new("workflow_run")
        );
    }
}
