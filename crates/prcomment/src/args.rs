use std::sync::Arc;

use clap::Parser;
use prcomment_config::{ApiDriver, Config};
use prcomment_core::CoreModule;
use prcomment_ghapi_github::GithubApiService;
use prcomment_ghapi_interface::ApiService;
use prcomment_ghapi_null::NullApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// Post or update a single report comment on a pull request
#[derive(Parser)]
#[command(version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    /// Does the command talk to the GitHub API?
    pub fn uses_api(&self) -> bool {
        self.cmd.uses_api()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GithubApiService API driver");
                Box::new(GithubApiService::new(config.clone()))
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let ctx = CommandContext {
            config,
            core_module: CoreModule::builder().build(),
            api_service,
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
