use std::io::Write;

use anyhow::bail;
use async_trait::async_trait;
use clap::Parser;
use ghook_ghapi_interface::types::{GhEvent, GhHookConfig, GhHookContentType, GhHookCreation};

use super::{Command, CommandContext};
use crate::Result;

/// Subscribe a repository to webhook events
#[derive(Parser)]
pub(crate) struct SubscribeCommand {
    /// Repository path (e.g. `owner/name`)
    pub repository_path: String,
    /// Webhook delivery URL
    #[arg(short, long)]
    pub target_url: String,
    /// Event to subscribe to, repeatable
    #[arg(short, long = "event", default_value = "push")]
    pub events: Vec<String>,
    /// Payload content type
    #[arg(long, default_value = "json")]
    pub content_type: GhHookContentType,
    /// Hook name
    #[arg(long, default_value = "web")]
    pub name: String,
    /// Register the hook without activating deliveries
    #[arg(long)]
    pub inactive: bool,
}

#[async_trait]
impl Command for SubscribeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let Some((owner, name)) = self.repository_path.split_once('/') else {
            bail!(
                "Invalid repository path '{}', expected 'owner/name'",
                self.repository_path
            );
        };

        let creation = GhHookCreation {
            name: self.name,
            active: !self.inactive,
            events: self
                .events
                .iter()
                .map(|e| GhEvent::new(e.as_str()))
                .collect(),
            config: GhHookConfig {
                url: self.target_url,
                content_type: self.content_type,
            },
        };

        let hook = ctx.api_service.hooks_create(owner, name, &creation).await?;

        writeln!(
            ctx.writer.write().await,
            "Webhook {} registered on repository '{}'.",
            hook.id,
            self.repository_path
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghook_ghapi_interface::types::{GhEvent, GhHook, GhHookContentType};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run_default_events() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_hooks_create()
            .times(1)
            .withf(|owner, name, creation| {
                owner == "octocat"
                    && name == "hello"
                    && creation.name == "web"
                    && creation.active
                    && creation.events == vec![GhEvent::push()]
                    && creation.config.url == "https://example.com/webhook"
                    && creation.config.content_type == GhHookContentType::Json
            })
            .returning(|_, _, _| {
                Ok(GhHook {
                    id: 12345678,
                    ..Default::default()
                })
            });

        assert_eq!(
            test_command(
                ctx,
                &[
                    "subscribe",
                    "octocat/hello",
                    "--target-url",
                    "https://example.com/webhook"
                ]
            )
            .await,
            "Webhook 12345678 registered on repository 'octocat/hello'.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_multiple_events_inactive() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_hooks_create()
            .times(1)
            .withf(|_, _, creation| {
                !creation.active
                    && creation.events
                        == vec![GhEvent::push(), GhEvent::issues(), GhEvent::pull_request()]
            })
            .returning(|_, _, _| {
                Ok(GhHook {
                    id: 1,
                    ..Default::default()
                })
            });

        assert_eq!(
            test_command(
                ctx,
                &[
                    "subscribe",
                    "octocat/hello",
                    "--target-url",
                    "https://example.com/webhook",
                    "--event",
                    "push",
                    "--event",
                    "issues",
                    "--event",
                    "pull_request",
                    "--inactive"
                ]
            )
            .await,
            "Webhook 1 registered on repository 'octocat/hello'.\n"
        );

        Ok(())
    }
}
