//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use prcomment_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config);

    let mut headers = default_headers();
    let mut authorization =
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
            .map_err(|e| GitHubError::InvalidHeaderError { source: e })?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("prcomment/{}", config.version))
        .default_headers(default_headers())
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );
    headers.insert(
        GITHUB_API_VERSION_HEADER,
        header::HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}
