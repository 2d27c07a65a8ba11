//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the `DebtBuddy` application,
//! including all slash commands, autocomplete handlers, the shared command
//! context, and the task that forwards ledger notifications to a channel.

/// Discord command implementations (debt, report, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    config::settings::Settings,
    core::{
        ledger::DebtLedger,
        notify::{NotificationKind, NotificationReceiver},
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared data available to all bot commands.
/// This structure holds the database connection, the debt ledger, and the
/// deployment settings that commands need to access.
pub struct BotData {
    /// Database connection for profile lookups
    pub database: sea_orm::DatabaseConnection,
    /// The debt ledger backing every debt command
    pub ledger: Arc<DebtLedger>,
    /// Deployment settings (notification channel, currency symbol)
    pub settings: Settings,
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Forwards ledger notifications to the configured Discord channel.
///
/// Runs until the sending half is dropped. Without a configured channel the
/// notifications are logged only.
async fn forward_notifications(
    http: Arc<serenity::Http>,
    channel: Option<serenity::ChannelId>,
    mut notifications: NotificationReceiver,
) {
    while let Some(notification) = notifications.recv().await {
        let marker = match notification.kind {
            NotificationKind::Success => {
                info!("{}: {}", notification.title, notification.description);
                "✅"
            }
            NotificationKind::Destructive => {
                warn!("{}: {}", notification.title, notification.description);
                "❌"
            }
        };

        if let Some(channel) = channel {
            let text = format!(
                "{marker} **{}** - {}",
                notification.title, notification.description
            );
            if let Err(e) = channel.say(&http, text).await {
                error!("Failed to forward notification to channel {channel}: {e}");
            }
        }
    }
}

/// Builds the poise framework and runs the bot until shutdown.
pub async fn run_bot(
    token: String,
    database: sea_orm::DatabaseConnection,
    ledger: Arc<DebtLedger>,
    notifications: NotificationReceiver,
    settings: Settings,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::debts(),
                commands::report(),
                commands::refresh_debts(),
                commands::add_debt(),
                commands::update_debt(),
                commands::toggle_paid(),
                commands::delete_debt(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                let channel = settings.notify_channel().map(serenity::ChannelId::new);
                tokio::spawn(forward_notifications(
                    Arc::clone(&ctx.http),
                    channel,
                    notifications,
                ));

                Ok(BotData {
                    database,
                    ledger,
                    settings,
                })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}
