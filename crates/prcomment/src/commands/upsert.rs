use async_trait::async_trait;
use clap::Parser;
use prcomment_core::use_cases::comments::{
    UpsertReportCommentInterface, UpsertReportCommentOutcome,
};
use shaku::HasComponent;

use super::inputs::{ReportArgs, TargetArgs};
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Post the report comment, or update it if it already exists
#[derive(Debug, Parser)]
pub(crate) struct UpsertCommand {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    report: ReportArgs,
}

#[async_trait]
impl Command for UpsertCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let pr_handle = self.target.resolve(&ctx.config)?;
        let report = self.report.resolve(&ctx.config)?;

        let upsert_report_comment: &dyn UpsertReportCommentInterface =
            ctx.core_module.resolve_ref();
        let outcome = upsert_report_comment
            .run(&ctx.as_core_context(), &pr_handle, &report)
            .await?;

        let action = match outcome {
            UpsertReportCommentOutcome::Created { .. } => "created",
            UpsertReportCommentOutcome::Updated { .. } => "updated",
        };

        writeln!(
            ctx.writer.write().await,
            "Comment #{} {} on {}.",
            outcome.comment_id(),
            action,
            pr_handle
        )?;

        Ok(())
    }
}
