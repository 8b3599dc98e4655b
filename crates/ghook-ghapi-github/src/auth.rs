//! Auth.

use std::time::Duration;

use ghook_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get a GitHub client builder, authenticated when a token is configured.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    let token = &config.api.github.token;
    if !token.is_empty() {
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {token}"))
                .map_err(|e| GitHubError::ImplementationError { source: e.into() })?,
        );
    }

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("ghook/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}

#[cfg(test)]
mod tests {
    use ghook_config::Config;

    use super::build_github_url;

    #[test]
    fn url_concatenation() {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = "https://api.github.com".into();

        assert_eq!(
            build_github_url(&config, "/repos/octocat/hello/hooks"),
            "https://api.github.com/repos/octocat/hello/hooks"
        );
    }
}
