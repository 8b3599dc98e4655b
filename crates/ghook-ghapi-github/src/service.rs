//! GitHub adapter.

use async_trait::async_trait;
use ghook_config::{Config, ENV_GITHUB_TOKEN};
use ghook_ghapi_interface::{
    types::{GhHook, GhHookCreation},
    ApiError, ApiService, Result,
};
use reqwest::Client;

use crate::{
    auth::{build_github_url, get_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates a new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a new GitHub API adapter, making sure an API token is configured.
    pub fn from_config(config: Config) -> Result<Self> {
        if config.api.github.token.is_empty() {
            return Err(ApiError::MissingApiCredentials {
                variable: ENV_GITHUB_TOKEN.into(),
            });
        }

        Ok(Self::new(config))
    }

    /// Creates a new GitHub API adapter from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(Config::from_env_no_version())
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn hooks_create_inner(
        &self,
        owner: &str,
        name: &str,
        creation: &GhHookCreation,
    ) -> Result<GhHook, GitHubError> {
        Ok(self
            .get_client()?
            .post(&self.build_url(format!("/repos/{owner}/{name}/hooks")))
            .json(creation)
            .send()
            .await?
            .error_for_status()?
            .json::<GhHook>()
            .await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn hooks_create(
        &self,
        owner: &str,
        name: &str,
        creation: &GhHookCreation,
    ) -> Result<GhHook> {
        let hook = self.hooks_create_inner(owner, name, creation).await?;

        if hook.is_registered() {
            Ok(hook)
        } else {
            Err(ApiError::EmptyHookResponse {
                repository_path: format!("{owner}/{name}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use ghook_config::Config;
    use ghook_ghapi_interface::{
        types::{GhEvent, GhHookCreation},
        ApiError, ApiService,
    };
    use pretty_assertions::assert_eq;
    use wiremock::{
        matchers::{body_partial_json, header, header_exists, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::GithubApiService;

    fn test_config(root_url: &str, token: &str) -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = root_url.into();
        config.api.github.token = token.into();
        config
    }

    fn sample_creation() -> GhHookCreation {
        GhHookCreation::webhook(
            "https://example.com/webhook",
            vec![GhEvent::push(), GhEvent::pull_request()],
        )
    }

    #[tokio::test]
    async fn hooks_create() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/hooks"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .and(header("Authorization", "token gh-token"))
            .and(body_partial_json(serde_json::json!({
                "name": "web",
                "active": true,
                "events": ["push", "pull_request"],
                "config": {
                    "url": "https://example.com/webhook",
                    "content_type": "json"
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 12345678,
                "name": "web",
                "active": true,
                "events": ["push", "pull_request"],
                "config": {
                    "url": "https://example.com/webhook",
                    "content_type": "json"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(test_config(&server.uri(), "gh-token"));
        let hook = service
            .hooks_create("octocat", "hello", &sample_creation())
            .await
            .unwrap();

        assert!(hook.is_registered());
        assert_eq!(hook.id, 12345678);
    }

    #[tokio::test]
    async fn hooks_create_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/hooks"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(test_config(&server.uri(), "gh-token"));
        let error = service
            .hooks_create("octocat", "hello", &sample_creation())
            .await
            .unwrap_err();

        assert!(error.to_string().contains("404"));
    }

    #[tokio::test]
    async fn hooks_create_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/hooks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(test_config(&server.uri(), "gh-token"));
        let error = service
            .hooks_create("octocat", "hello", &sample_creation())
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ApiError::EmptyHookResponse { repository_path } if repository_path == "octocat/hello"
        ));
    }

    #[tokio::test]
    async fn anonymous_client_sends_no_authorization() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/hooks"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octocat/hello/hooks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 1
            })))
            .mount(&server)
            .await;

        let service = GithubApiService::new(test_config(&server.uri(), ""));
        let hook = service
            .hooks_create("octocat", "hello", &sample_creation())
            .await
            .unwrap();

        assert!(hook.is_registered());
    }

    #[test]
    fn from_config_requires_token() {
        let error = GithubApiService::from_config(test_config("https://api.github.com", ""))
            .map(|_| ())
            .unwrap_err();

        assert!(error.to_string().contains("GHOOK_API_GITHUB_TOKEN"));
    }
}
