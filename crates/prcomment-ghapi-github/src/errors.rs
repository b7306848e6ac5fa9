use prcomment_ghapi_interface::ApiError;

/// GitHub driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authorization header value,\n  caused by: {}", source)]
    InvalidHeaderError {
        source: http::header::InvalidHeaderValue,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
