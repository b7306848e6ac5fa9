use async_trait::async_trait;
use clap::Parser;

use super::inputs::ReportArgs;
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Print the comment body without posting it
#[derive(Debug, Parser)]
pub(crate) struct RenderCommand {
    #[command(flatten)]
    report: ReportArgs,
}

#[async_trait]
impl Command for RenderCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let report = self.report.resolve(&ctx.config)?;

        writeln!(ctx.writer.write().await, "{}", report.render())?;
        Ok(())
    }
}
