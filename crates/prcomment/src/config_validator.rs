//! Validation utilities.

use std::fmt::Write;

use prcomment_config::{ApiDriver, Config};
use thiserror::Error;

const MAX_COMMENTS_PAGE_SIZE: u64 = 100;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    if config.api.driver == ApiDriver::GitHub {
        if config.api.github.token.is_empty() {
            _missing(&mut error, "PRCOMMENT_API_GITHUB_TOKEN");
        }
        if config.api.github.root_url.is_empty() {
            _missing(&mut error, "PRCOMMENT_API_GITHUB_ROOT_URL");
        }
        if !(1..=MAX_COMMENTS_PAGE_SIZE).contains(&config.api.github.comments_page_size) {
            _invalid(
                &mut error,
                "PRCOMMENT_API_GITHUB_COMMENTS_PAGE_SIZE",
                "must be between 1 and 100",
            );
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
