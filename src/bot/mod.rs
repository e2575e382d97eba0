//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for PantryBuddy, including all
//! slash commands, autocomplete handlers, and the shared bot context.

/// Discord command implementations (items, dashboard, recipes, general)
pub mod commands;
/// Shared message formatting
pub mod format;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    config::AppConfig,
    errors::{Error, Result},
    recipe_api::SpoonacularClient,
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Settings loaded from config.toml
    pub config: AppConfig,
    /// Recipe service client; `None` when no API key is configured
    pub recipe_client: Option<SpoonacularClient>,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(
        database: DatabaseConnection,
        config: AppConfig,
        recipe_client: Option<SpoonacularClient>,
    ) -> Self {
        Self {
            database,
            config,
            recipe_client,
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error:?}", ctx.command().name);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Registers the slash commands and runs the Discord client until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::item(),
                commands::dashboard(),
                commands::recipes(),
                commands::recipe_detail(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;
    Ok(())
}
