use serde::{Deserialize, Serialize};

/// GitHub Commit status state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCommitStatusState {
    /// Pending.
    #[default]
    Pending,
    /// Success.
    Success,
    /// Failure.
    Failure,
    /// Error.
    Error,
}

serde_plain::forward_display_to_serde!(GhCommitStatusState);
