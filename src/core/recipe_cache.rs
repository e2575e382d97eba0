//! Recipe cache - Persists external recipe lookups for a limited time.
//!
//! Lookups against the recipe service are slow and rate-limited, so results are
//! stored in the `recipe_cache` table keyed by the query. An entry is fresh while
//! it is younger than the configured TTL.

use crate::{
    core::{matcher::normalize_ingredient, recipe::Recipe},
    entities::{RecipeCache, recipe_cache},
    errors::Result,
};
use chrono::{Duration, NaiveDateTime};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Builds the cache key for a lookup: the normalised ingredients, sorted and
/// joined, plus the requested number of recipes.
#[must_use]
pub fn cache_key<S: AsRef<str>>(ingredients: &[S], limit: usize) -> String {
    let mut names: Vec<String> = ingredients
        .iter()
        .map(|name| normalize_ingredient(name.as_ref()).replace(' ', "-"))
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    format!("recipes:{}:{limit}", names.join("_"))
}

/// Returns the cached recipes for `key` if an entry exists and is younger than `ttl`.
///
/// # Errors
/// Returns an error if the query fails or the stored payload is not valid JSON.
pub async fn get_cached_recipes(
    db: &DatabaseConnection,
    key: &str,
    now: NaiveDateTime,
    ttl: Duration,
) -> Result<Option<Vec<Recipe>>> {
    let Some(entry) = RecipeCache::find()
        .filter(recipe_cache::Column::CacheKey.eq(key))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    if now.signed_duration_since(entry.fetched_at) >= ttl {
        debug!("Cache entry '{key}' is stale");
        return Ok(None);
    }

    let recipes: Vec<Recipe> = serde_json::from_str(&entry.payload)?;
    Ok(Some(recipes))
}

/// Stores `recipes` under `key`, replacing any existing entry.
///
/// # Errors
/// Returns an error if the recipes can't be encoded or the write fails.
pub async fn store_recipes(
    db: &DatabaseConnection,
    key: &str,
    recipes: &[Recipe],
    now: NaiveDateTime,
) -> Result<()> {
    let payload = serde_json::to_string(recipes)?;

    let existing = RecipeCache::find()
        .filter(recipe_cache::Column::CacheKey.eq(key))
        .one(db)
        .await?;

    if let Some(entry) = existing {
        let mut active_model: recipe_cache::ActiveModel = entry.into();
        active_model.payload = Set(payload);
        active_model.fetched_at = Set(now);
        active_model.update(db).await?;
    } else {
        let entry = recipe_cache::ActiveModel {
            cache_key: Set(key.to_string()),
            payload: Set(payload),
            fetched_at: Set(now),
            ..Default::default()
        };
        entry.insert(db).await?;
    }

    Ok(())
}

/// Deletes every entry fetched before `cutoff`. Returns the number removed.
///
/// # Errors
/// Returns an error if the delete fails.
pub async fn prune_stale_entries(db: &DatabaseConnection, cutoff: NaiveDateTime) -> Result<u64> {
    let result = RecipeCache::delete_many()
        .filter(recipe_cache::Column::FetchedAt.lt(cutoff))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::recipe::RecipeSource;
    use crate::test_utils::*;

    fn sample_recipes() -> Vec<Recipe> {
        vec![Recipe {
            id: "716429".to_string(),
            name: "Pasta with Garlic".to_string(),
            ingredients: vec!["pasta".to_string(), "garlic".to_string()],
            instructions: "Boil pasta. Fry garlic.".to_string(),
            category: "main course".to_string(),
            cooking_minutes: 45,
            servings: 2,
            source_url: Some("https://example.com/pasta".to_string()),
            source: RecipeSource::ExternalApi,
        }]
    }

    #[test]
    fn test_cache_key_is_order_and_case_insensitive() {
        let a = cache_key(&["Tomato", "rice", "Green  Chili"], 12);
        let b = cache_key(&["green chili", "RICE", "tomato", "rice"], 12);
        assert_eq!(a, b);
        assert_eq!(a, "recipes:green-chili_rice_tomato:12");
        assert_ne!(a, cache_key(&["tomato", "rice", "green chili"], 5));
    }

    #[tokio::test]
    async fn test_store_and_read_fresh_entry() -> Result<()> {
        let db = setup_test_db().await?;
        let now = test_now();

        store_recipes(&db, "recipes:pasta:12", &sample_recipes(), now).await?;

        let cached =
            get_cached_recipes(&db, "recipes:pasta:12", now + Duration::hours(1), Duration::hours(4))
                .await?;
        assert_eq!(cached, Some(sample_recipes()));
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_entry_is_ignored() -> Result<()> {
        let db = setup_test_db().await?;
        let now = test_now();

        store_recipes(&db, "recipes:pasta:12", &sample_recipes(), now).await?;

        let cached =
            get_cached_recipes(&db, "recipes:pasta:12", now + Duration::hours(4), Duration::hours(4))
                .await?;
        assert!(cached.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_entry() -> Result<()> {
        let db = setup_test_db().await?;
        let cached = get_cached_recipes(&db, "nope", test_now(), Duration::hours(4)).await?;
        assert!(cached.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_store_replaces_existing_entry() -> Result<()> {
        let db = setup_test_db().await?;
        let now = test_now();

        store_recipes(&db, "key", &sample_recipes(), now).await?;
        store_recipes(&db, "key", &[], now + Duration::hours(1)).await?;

        let rows = RecipeCache::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payload, "[]");
        assert_eq!(rows[0].fetched_at, now + Duration::hours(1));
        Ok(())
    }

    #[tokio::test]
    async fn test_prune_stale_entries() -> Result<()> {
        let db = setup_test_db().await?;
        let now = test_now();

        store_recipes(&db, "old", &sample_recipes(), now - Duration::hours(10)).await?;
        store_recipes(&db, "new", &sample_recipes(), now).await?;

        let removed = prune_stale_entries(&db, now - Duration::hours(4)).await?;
        assert_eq!(removed, 1);

        let remaining = RecipeCache::find().all(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].cache_key, "new");
        Ok(())
    }
}
