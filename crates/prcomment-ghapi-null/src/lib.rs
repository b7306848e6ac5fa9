//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use prcomment_ghapi_interface::{types::GhIssueComment, ApiService, Result};

/// Null API service.
///
/// Lists no comments and acknowledges every mutation with ID 0.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(0)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn does_nothing() {
        let service = NullApiService::new();

        assert!(service.comments_list("me", "test", 1).await.unwrap().is_empty());
        assert_eq!(service.comments_post("me", "test", 1, "body").await.unwrap(), 0);
        assert_eq!(
            service.comments_update("me", "test", 1, "body").await.unwrap(),
            0
        );
    }
}
