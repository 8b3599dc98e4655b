//! GitHub API interface.
//!
//! Defines the webhook payload types and the adapter trait used to
//! communicate with the GitHub REST API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(feature = "testkit")]
pub use interface::MockApiService;
pub use interface::ApiService;
