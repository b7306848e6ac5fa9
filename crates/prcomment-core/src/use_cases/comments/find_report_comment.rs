use async_trait::async_trait;
use prcomment_ghapi_interface::types::GhIssueComment;
use prcomment_models::{PullRequestHandle, Report};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Find the comment managed for a report on a pull request.
///
/// The managed comment is the first comment, in listing order, written by a
/// bot account and whose body contains the report title.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FindReportCommentInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        report: &Report,
    ) -> Result<Option<GhIssueComment>>;
}

#[derive(Component)]
#[shaku(interface = FindReportCommentInterface)]
pub(crate) struct FindReportComment;

#[async_trait]
impl FindReportCommentInterface for FindReportComment {
    #[tracing::instrument(
        skip(self, ctx, pr_handle, report),
        fields(pr_handle = %pr_handle, title = report.title())
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        report: &Report,
    ) -> Result<Option<GhIssueComment>> {
        let comments = ctx
            .api_service
            .comments_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        Ok(comments
            .into_iter()
            .find(|comment| comment.user.is_bot() && report.is_identified_by(&comment.body)))
    }
}
