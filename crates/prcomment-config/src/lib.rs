//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for env. var. {name}: {source}")]
    InvalidDriver { name: String, source: DriverError },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
    /// Page size used when listing issue comments.
    pub comments_page_size: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Report content, as supplied by the workflow.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Report title, also used to identify the managed comment.
    pub title: String,
    /// Report summary.
    pub summary: String,
}

/// GitHub Actions context.
#[derive(Debug, Clone)]
pub struct ActionsConfig {
    /// Repository path, as `owner/name`.
    pub repository: String,
    /// Path to the JSON event payload.
    pub event_path: String,
}

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tool name.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Report options.
    pub report: ReportConfig,
    /// GitHub Actions options.
    pub actions: ActionsConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        let driver_value = env_to_str("PRCOMMENT_API_DRIVER", "github");
        let driver =
            ApiDriver::from_str(&driver_value).map_err(|e| ConfigError::InvalidDriver {
                name: "PRCOMMENT_API_DRIVER".into(),
                source: e,
            })?;

        Ok(Config {
            name: env_to_str("PRCOMMENT_NAME", "prcomment"),
            api: ApiConfig {
                driver,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("PRCOMMENT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_first_str(
                        &["PRCOMMENT_API_GITHUB_ROOT_URL", "GITHUB_API_URL"],
                        "https://api.github.com",
                    ),
                    token: env_to_first_str(&["PRCOMMENT_API_GITHUB_TOKEN", "GITHUB_TOKEN"], ""),
                    comments_page_size: env_to_u64("PRCOMMENT_API_GITHUB_COMMENTS_PAGE_SIZE", 100),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("PRCOMMENT_LOGGING_USE_BUNYAN", false),
            },
            report: ReportConfig {
                title: env_to_first_str(&["PRCOMMENT_REPORT_TITLE", "title"], ""),
                summary: env_to_first_str(&["PRCOMMENT_REPORT_SUMMARY", "summary"], ""),
            },
            actions: ActionsConfig {
                repository: env_to_str("GITHUB_REPOSITORY", ""),
                event_path: env_to_str("GITHUB_EVENT_PATH", ""),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, ConfigError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

// First variable set wins. Values are kept verbatim.
fn env_to_first_str(names: &[&str], default: &str) -> String {
    names
        .iter()
        .find_map(|name| env::var(name).ok())
        .unwrap_or_else(|| default.to_string())
}
