use async_trait::async_trait;
use prcomment_models::{PullRequestHandle, Report};
use shaku::{Component, HasComponent, Interface};
use tracing::{info, warn};

use super::FindReportCommentInterface;
use crate::{CoreContext, Result};

/// What happened to the managed comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertReportCommentOutcome {
    Created { comment_id: u64 },
    Updated { comment_id: u64 },
}

impl UpsertReportCommentOutcome {
    pub fn comment_id(&self) -> u64 {
        match self {
            Self::Created { comment_id } | Self::Updated { comment_id } => *comment_id,
        }
    }
}

/// Post a report on a pull request, or update the comment already managed for it.
///
/// Exactly one mutation is issued per run. Runs are not serialized: two
/// concurrent runs on the same pull request can both miss the managed comment
/// and create one each.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpsertReportCommentInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        report: &Report,
    ) -> Result<UpsertReportCommentOutcome>;
}

#[derive(Component)]
#[shaku(interface = UpsertReportCommentInterface)]
pub(crate) struct UpsertReportComment;

#[async_trait]
impl UpsertReportCommentInterface for UpsertReportComment {
    #[tracing::instrument(
        skip(self, ctx, pr_handle, report),
        fields(pr_handle = %pr_handle, title = report.title()),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        report: &Report,
    ) -> Result<UpsertReportCommentOutcome> {
        if report.title().is_empty() {
            warn!(
                pr_handle = %pr_handle,
                message = "Report title is empty, any bot comment will match"
            );
        }

        let find_report_comment: &dyn FindReportCommentInterface = ctx.core_module.resolve_ref();
        let existing = find_report_comment.run(ctx, pr_handle, report).await?;
        let body = report.render();

        match existing {
            Some(comment) => {
                let comment_id = ctx
                    .api_service
                    .comments_update(pr_handle.owner(), pr_handle.name(), comment.id, &body)
                    .await?;

                info!(
                    pr_handle = %pr_handle,
                    comment_id = comment_id,
                    message = "Updated report comment"
                );
                Ok(UpsertReportCommentOutcome::Updated { comment_id })
            }
            None => {
                let comment_id = ctx
                    .api_service
                    .comments_post(
                        pr_handle.owner(),
                        pr_handle.name(),
                        pr_handle.number(),
                        &body,
                    )
                    .await?;

                info!(
                    pr_handle = %pr_handle,
                    comment_id = comment_id,
                    message = "Created report comment"
                );
                Ok(UpsertReportCommentOutcome::Created { comment_id })
            }
        }
    }
}
