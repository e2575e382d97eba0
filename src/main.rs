use pantry_buddy::{
    bot::{self, BotData},
    config::{database, settings},
    core::recipe_cache,
    errors::{Error, Result},
    recipe_api::SpoonacularClient,
};
use chrono::Duration;
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings from config.toml (optional)
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;

    // 4. Connect to the database and create missing tables
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Drop cached recipe lookups that can no longer be served
    let cutoff =
        chrono::Utc::now().naive_utc() - Duration::hours(app_config.recipes.cache_ttl_hours);
    match recipe_cache::prune_stale_entries(&db, cutoff).await {
        Ok(removed) => info!("Pruned {removed} stale recipe cache entries."),
        Err(e) => warn!("Failed to prune recipe cache: {e}"),
    }

    // 6. Recipe service client, if an API key is configured
    let recipe_client = SpoonacularClient::from_env(&app_config.recipes)?;
    if recipe_client.is_none() {
        info!("SPOONACULAR_API_KEY not set, recipe suggestions will use the built-in recipes.");
    }

    // 7. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(db, app_config, recipe_client)).await
}
