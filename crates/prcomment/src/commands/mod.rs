//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use prcomment_config::Config;
use prcomment_core::{CoreContext, CoreModule};
use prcomment_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{render::RenderCommand, show::ShowCommand, upsert::UpsertCommand};
use crate::Result;

mod inputs;
mod render;
mod show;
mod upsert;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Upsert(UpsertCommand),
    Show(ShowCommand),
    Render(RenderCommand),
}

impl SubCommand {
    pub fn uses_api(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Upsert(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
            Self::Render(sub) => sub.execute(ctx).await,
        }
    }
}
