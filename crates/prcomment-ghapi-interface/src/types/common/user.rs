use serde::{Deserialize, Serialize};

use super::GhUserType;

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
    /// Account type.
    #[serde(rename = "type", default)]
    pub user_type: GhUserType,
}

impl GhUser {
    /// Is the account an automation account?
    pub fn is_bot(&self) -> bool {
        self.user_type == GhUserType::Bot
    }
}
