use async_trait::async_trait;
use clap::Parser;
use ghook_server::server::{run_webhook_server, AppContext};

use super::{Command, CommandContext};
use crate::Result;

/// Start webhook server
#[derive(Parser)]
pub(crate) struct ServerCommand {
    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let mut config = ctx.config;
            if let Some(port) = self.port {
                config.server.bind_port = port;
            }

            run_webhook_server(AppContext::new(config)).await.unwrap();
        })
        .await?;

        Ok(())
    }
}
