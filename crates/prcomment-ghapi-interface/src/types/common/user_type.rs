use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub account type, as classified by GitHub.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default, Eq, Clone, Copy)]
pub enum GhUserType {
    /// Human account.
    #[default]
    User,
    /// Automation account (GitHub Apps, Actions).
    Bot,
    /// Organization.
    Organization,
    /// Anything else GitHub may return.
    #[serde(other)]
    Other,
}

impl Display for GhUserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}
