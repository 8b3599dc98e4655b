use async_trait::async_trait;

use crate::{
    types::{GhHook, GhHookCreation},
    Result,
};

/// GitHub API Adapter interface.
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Create a webhook on a target repository.
    async fn hooks_create(
        &self,
        owner: &str,
        name: &str,
        creation: &GhHookCreation,
    ) -> Result<GhHook>;
}
