use serde::{Deserialize, Serialize};

/// GitHub Review state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewState {
    /// Approved.
    #[default]
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

serde_plain::forward_display_to_serde!(GhReviewState);
serde_plain::forward_from_str_to_serde!(GhReviewState);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::GhReviewState;

    #[test]
    fn str_conversions() {
        assert_eq!(GhReviewState::ChangesRequested.to_string(), "changes_requested");
        assert_eq!(
            "approved".parse::<GhReviewState>().unwrap(),
            GhReviewState::Approved
        );
    }
}
