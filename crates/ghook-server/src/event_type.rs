//! Event types.

use std::convert::TryFrom;

use thiserror::Error;

/// Event type error.
#[derive(Debug, Error)]
pub enum EventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent { event: String },
}

/// Event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Organization event.
    Organization,
    /// Ping event.
    Ping,
    /// Pull request event.
    PullRequest,
    /// Pull request review event.
    PullRequestReview,
    /// Pull request review comment event.
    PullRequestReviewComment,
    /// Push event.
    Push,
    /// Release event.
    Release,
    /// Repository event.
    Repository,
    /// Status event.
    Status,
    /// Team event.
    Team,
    /// Team add event.
    TeamAdd,
    /// Watch event.
    Watch,
}

impl EventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "organization" => Ok(Self::Organization),
            "ping" => Ok(Self::Ping),
            "pull_request" => Ok(Self::PullRequest),
            "pull_request_review" => Ok(Self::PullRequestReview),
            "pull_request_review_comment" => Ok(Self::PullRequestReviewComment),
            "push" => Ok(Self::Push),
            "release" => Ok(Self::Release),
            "repository" => Ok(Self::Repository),
            "status" => Ok(Self::Status),
            "team" => Ok(Self::Team),
            "team_add" => Ok(Self::TeamAdd),
            "watch" => Ok(Self::Watch),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Organization => "organization",
            EventType::Ping => "ping",
            EventType::PullRequest => "pull_request",
            EventType::PullRequestReview => "pull_request_review",
            EventType::PullRequestReviewComment => "pull_request_review_comment",
            EventType::Push => "push",
            EventType::Release => "release",
            EventType::Repository => "repository",
            EventType::Status => "status",
            EventType::Team => "team",
            EventType::TeamAdd => "team_add",
            EventType::Watch => "watch",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use pretty_assertions::assert_eq;

    use super::EventType;

    #[test]
    fn event_as_str() {
        assert_eq!(EventType::Ping.to_str(), "ping");
        assert_eq!(EventType::PullRequest.to_str(), "pull_request");
        assert_eq!(EventType::TeamAdd.to_str(), "team_add");
    }

    #[test]
    fn event_from_str() {
        assert_eq!(EventType::try_from("push").unwrap(), EventType::Push);
        assert!(EventType::try_from("label").is_err());
    }
}
