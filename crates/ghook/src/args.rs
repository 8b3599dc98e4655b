use std::sync::Arc;

use clap::Parser;
use ghook_config::Config;
use ghook_ghapi_github::GithubApiService;
use ghook_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            // The server does not need credentials, subscriptions do
            let api_service: Box<dyn ApiService + Send + Sync + 'static> = match &args.cmd {
                SubCommand::Server(_) => Box::new(GithubApiService::new(config.clone())),
                SubCommand::Subscribe(_) => {
                    Box::new(GithubApiService::from_config(config.clone())?)
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
