//! Database configuration module for `PantryBuddy`.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust models without hand-written SQL.

use crate::entities::{FoodItem, RecipeCache};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://pantry_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling
/// back to a local `SQLite` file that is created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
///
/// # Errors
/// Returns an error if the database can't be opened.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all tables that don't exist yet.
///
/// Safe to call on every startup: existing tables and their rows are left alone.
///
/// # Errors
/// Returns an error if a `CREATE TABLE` statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut food_item_table = schema.create_table_from_entity(FoodItem);
    food_item_table.if_not_exists();
    let mut recipe_cache_table = schema.create_table_from_entity(RecipeCache);
    recipe_cache_table.if_not_exists();

    db.execute(builder.build(&food_item_table)).await?;
    db.execute(builder.build(&recipe_cache_table)).await?;

    info!("Database tables ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{food_item::Model as FoodItemModel, recipe_cache::Model as CacheModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<FoodItemModel> = FoodItem::find().limit(1).all(&db).await?;
        let _: Vec<CacheModel> = RecipeCache::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
