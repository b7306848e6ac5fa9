use async_trait::async_trait;
use clap::Parser;
use prcomment_core::use_cases::comments::FindReportCommentInterface;
use shaku::HasComponent;

use super::inputs::{ReportArgs, TargetArgs};
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the comment currently managed for a report
#[derive(Debug, Parser)]
pub(crate) struct ShowCommand {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    report: ReportArgs,
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let pr_handle = self.target.resolve(&ctx.config)?;
        let report = self.report.resolve(&ctx.config)?;

        let find_report_comment: &dyn FindReportCommentInterface = ctx.core_module.resolve_ref();
        let comment = find_report_comment
            .run(&ctx.as_core_context(), &pr_handle, &report)
            .await?;

        match comment {
            Some(comment) => {
                writeln!(
                    ctx.writer.write().await,
                    "Comment #{} by '{}' on {}:",
                    comment.id,
                    comment.user.login,
                    pr_handle
                )?;
                writeln!(ctx.writer.write().await, "{}", comment.body)?;
            }
            None => {
                writeln!(
                    ctx.writer.write().await,
                    "No managed comment found for title '{}' on {}.",
                    report.title(),
                    pr_handle
                )?;
            }
        }

        Ok(())
    }
}
