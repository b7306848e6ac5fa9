use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::common::GhUser;

/// GitHub Issue comment.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, SmartDefault)]
pub struct GhIssueComment {
    /// ID.
    pub id: u64,
    /// User. Deleted accounts come as `null` and map to a non-bot default.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub user: GhUser,
    /// Created at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Body.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub body: String,
}

// GitHub sends `null` for empty bodies and ghost users.
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
