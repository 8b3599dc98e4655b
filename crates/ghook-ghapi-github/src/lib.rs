//! GitHub API implementation, backed by the GitHub REST v3 API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod service;

pub use errors::GitHubError;
pub use service::GithubApiService;
