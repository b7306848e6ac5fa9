//! GitHub adapter

use async_trait::async_trait;
use prcomment_config::Config;
use prcomment_ghapi_interface::{types::GhIssueComment, ApiError, ApiService, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(|e| ApiError::from(GitHubError::from(e)))
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn fetch_comments_page(
        &self,
        client: &Client,
        url: &str,
        page: u64,
    ) -> Result<Vec<GhIssueComment>, GitHubError> {
        let page_size = self.config.api.github.comments_page_size;

        Ok(client
            .get(url)
            .query(&[("per_page", page_size), ("page", page)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GhIssueComment>>()
            .await?)
    }
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct CommentResponse {
    id: u64,
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        let client = self.get_client()?;
        let url = self.build_url(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/comments"
        ));
        let page_size = self.config.api.github.comments_page_size;

        let mut comments = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.fetch_comments_page(&client, &url, page).await?;
            let last_page = batch.is_empty() || (batch.len() as u64) < page_size;
            comments.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = comments.len(), pages = page, "Listed issue comments");
        Ok(comments)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&CommentRequest { body })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<CommentResponse>()
            .await
            .map_err(GitHubError::from)?
            .id)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(self
            .get_client()?
            .patch(self.build_url(format!(
                "/repos/{owner}/{name}/issues/comments/{comment_id}"
            )))
            .json(&CommentRequest { body })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<CommentResponse>()
            .await
            .map_err(GitHubError::from)?
            .id)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use prcomment_ghapi_interface::types::GhUserType;
    use serde_json::json;

    use super::*;

    fn arrange_service(server: &MockServer, page_size: u64) -> GithubApiService {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = server.base_url();
        config.api.github.token = "this-is-a-token".into();
        config.api.github.comments_page_size = page_size;
        GithubApiService::new(config)
    }

    fn comment_json(id: u64, user_type: &str, body: &str) -> serde_json::Value {
        json!({
            "id": id,
            "body": body,
            "user": { "login": format!("user-{id}"), "type": user_type },
            "created_at": "2024-01-02T10:00:00Z",
            "updated_at": "2024-01-02T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn comments_list_single_page() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/me/test/issues/1/comments")
                    .query_param("per_page", "100")
                    .query_param("page", "1")
                    .header("authorization", "Bearer this-is-a-token");
                then.status(200).json_body(json!([
                    comment_json(1, "User", "Hello"),
                    comment_json(2, "Bot", "### Build Report\n\nok"),
                ]));
            })
            .await;

        let service = arrange_service(&server, 100);
        let comments = service.comments_list("me", "test", 1).await.unwrap();

        list.assert_async().await;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[1].user.user_type, GhUserType::Bot);
    }

    #[tokio::test]
    async fn comments_list_follows_pages() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/me/test/issues/1/comments")
                    .query_param("per_page", "2")
                    .query_param("page", "1");
                then.status(200).json_body(json!([
                    comment_json(1, "User", "a"),
                    comment_json(2, "User", "b"),
                ]));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/me/test/issues/1/comments")
                    .query_param("per_page", "2")
                    .query_param("page", "2");
                then.status(200)
                    .json_body(json!([comment_json(3, "Bot", "c")]));
            })
            .await;

        let service = arrange_service(&server, 2);
        let comments = service.comments_list("me", "test", 1).await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(
            comments.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn comments_list_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/me/test/issues/1/comments");
                then.status(200).json_body(json!([]));
            })
            .await;

        let service = arrange_service(&server, 100);
        assert!(service
            .comments_list("me", "test", 1)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn comments_list_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/me/test/issues/1/comments");
                then.status(404).json_body(json!({ "message": "Not Found" }));
            })
            .await;

        let service = arrange_service(&server, 100);
        assert!(service.comments_list("me", "test", 1).await.is_err());
    }

    #[tokio::test]
    async fn comments_post() {
        let server = MockServer::start_async().await;
        let post = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/repos/me/test/issues/1/comments")
                    .header("authorization", "Bearer this-is-a-token")
                    .json_body(json!({ "body": "### Build Report\n\nAll tests passed." }));
                then.status(201).json_body(json!({ "id": 42 }));
            })
            .await;

        let service = arrange_service(&server, 100);
        let id = service
            .comments_post("me", "test", 1, "### Build Report\n\nAll tests passed.")
            .await
            .unwrap();

        post.assert_async().await;
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn comments_update() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/repos/me/test/issues/comments/42")
                    .json_body(json!({ "body": "### Build Report\n\nStill passing." }));
                then.status(200).json_body(json!({ "id": 42 }));
            })
            .await;

        let service = arrange_service(&server, 100);
        let id = service
            .comments_update("me", "test", 42, "### Build Report\n\nStill passing.")
            .await
            .unwrap();

        update.assert_async().await;
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn comments_update_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path("/repos/me/test/issues/comments/42");
                then.status(401)
                    .json_body(json!({ "message": "Bad credentials" }));
            })
            .await;

        let service = arrange_service(&server, 100);
        assert!(service
            .comments_update("me", "test", 42, "body")
            .await
            .is_err());
    }
}
