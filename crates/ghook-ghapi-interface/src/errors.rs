//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing credentials.
    #[error("Expecting {} to have been set in your environment", variable)]
    MissingApiCredentials { variable: String },

    /// Empty hook response.
    #[error(
        "No subscription could be parsed for repository {}",
        repository_path
    )]
    EmptyHookResponse { repository_path: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
