//! Recipe suggestion flow.
//!
//! Resolves the candidate list (cache, then provider, then the built-in
//! fallback) and leaves scoring to [`crate::core::matcher`]. The fallback
//! substitution happens here, before matching, so the matcher never sees an
//! upstream failure.

use crate::{
    config::RecipeSettings,
    core::{fallback::fallback_recipes, recipe::Recipe, recipe_cache},
    errors::Result,
    recipe_api::RecipeProvider,
};
use chrono::{Duration, NaiveDateTime};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

/// Applies the fallback policy to a provider result.
///
/// A failure or an empty list is replaced by the full fallback list; anything
/// else is returned unchanged.
#[must_use]
pub fn resolve_candidates(fetched: Result<Vec<Recipe>>) -> Vec<Recipe> {
    match fetched {
        Ok(recipes) if !recipes.is_empty() => recipes,
        Ok(_) => {
            info!("Recipe service returned no recipes, using fallback recipes");
            fallback_recipes()
        }
        Err(e) => {
            warn!("Recipe service unavailable, using fallback recipes: {e}");
            fallback_recipes()
        }
    }
}

/// Fetches candidate recipes for `ingredients`.
///
/// Only the first `max_query_ingredients` names are sent upstream. A fresh cache
/// entry is used when present; successful non-empty lookups are cached. Cache
/// errors are logged and otherwise ignored. With no provider configured, or no
/// ingredients to search for, the fallback list is returned.
#[instrument(skip(db, provider, settings))]
pub async fn fetch_candidates<P: RecipeProvider + Sync>(
    db: &DatabaseConnection,
    provider: Option<&P>,
    ingredients: &[String],
    settings: &RecipeSettings,
    now: NaiveDateTime,
) -> Vec<Recipe> {
    let query: Vec<String> = ingredients
        .iter()
        .take(settings.max_query_ingredients)
        .cloned()
        .collect();

    let Some(provider) = provider.filter(|_| !query.is_empty()) else {
        return fallback_recipes();
    };

    let key = recipe_cache::cache_key(&query, settings.suggestion_limit);
    let ttl = Duration::hours(settings.cache_ttl_hours);

    match recipe_cache::get_cached_recipes(db, &key, now, ttl).await {
        Ok(Some(recipes)) if !recipes.is_empty() => {
            info!("Using cached recipes for {key}");
            return recipes;
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to read recipe cache for {key}: {e}"),
    }

    let fetched = provider
        .find_by_ingredients(&query, settings.suggestion_limit)
        .await;

    if let Ok(recipes) = &fetched {
        if !recipes.is_empty() {
            if let Err(e) = recipe_cache::store_recipes(db, &key, recipes, now).await {
                warn!("Failed to cache recipes for {key}: {e}");
            }
        }
    }

    resolve_candidates(fetched)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::{matcher::suggest_recipes, recipe::RecipeSource},
        errors::Error,
        test_utils::*,
    };
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    /// Provider that replays a canned answer and records each query
    struct StubProvider {
        answer: fn() -> Result<Vec<Recipe>>,
        calls: AtomicUsize,
        last_query: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(answer: fn() -> Result<Vec<Recipe>>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RecipeProvider for StubProvider {
        async fn find_by_ingredients(&self, ingredients: &[String], _limit: usize) -> Result<Vec<Recipe>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = ingredients.to_vec();
            (self.answer)()
        }
    }

    fn external_recipes() -> Result<Vec<Recipe>> {
        Ok(vec![Recipe {
            id: "1".to_string(),
            name: "Fried Rice".to_string(),
            ingredients: vec!["rice".to_string(), "egg".to_string()],
            instructions: "Fry everything.".to_string(),
            category: "main course".to_string(),
            cooking_minutes: 20,
            servings: 2,
            source_url: None,
            source: RecipeSource::ExternalApi,
        }])
    }

    fn no_recipes() -> Result<Vec<Recipe>> {
        Ok(Vec::new())
    }

    fn unavailable() -> Result<Vec<Recipe>> {
        Err(Error::UpstreamUnavailable {
            message: "timed out".to_string(),
        })
    }

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_resolve_keeps_fetched_recipes() {
        let candidates = resolve_candidates(external_recipes());
        assert_eq!(candidates, external_recipes().unwrap());
    }

    #[test]
    fn test_resolve_empty_uses_fallback() {
        let candidates = resolve_candidates(no_recipes());
        assert_eq!(candidates, fallback_recipes());

        let inventory = ["rice", "onion", "tomato"];
        let results = suggest_recipes(&inventory, &candidates);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.recipe.source == RecipeSource::Fallback));
    }

    #[test]
    fn test_resolve_failure_uses_fallback() {
        let candidates = resolve_candidates(unavailable());
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|r| r.source == RecipeSource::Fallback));
    }

    #[tokio::test]
    async fn test_no_provider_uses_fallback() -> Result<()> {
        let db = setup_test_db().await?;
        let candidates = fetch_candidates::<StubProvider>(
            &db,
            None,
            &ingredients(&["rice"]),
            &RecipeSettings::default(),
            test_now(),
        )
        .await;
        assert_eq!(candidates, fallback_recipes());
        Ok(())
    }

    #[tokio::test]
    async fn test_no_ingredients_skips_provider() -> Result<()> {
        let db = setup_test_db().await?;
        let provider = StubProvider::new(external_recipes);

        let candidates = fetch_candidates(
            &db,
            Some(&provider),
            &[],
            &RecipeSettings::default(),
            test_now(),
        )
        .await;

        assert_eq!(provider.calls(), 0);
        assert_eq!(candidates, fallback_recipes());
        Ok(())
    }

    #[tokio::test]
    async fn test_query_is_capped() -> Result<()> {
        let db = setup_test_db().await?;
        let provider = StubProvider::new(external_recipes);
        let settings = RecipeSettings {
            max_query_ingredients: 2,
            ..RecipeSettings::default()
        };

        fetch_candidates(
            &db,
            Some(&provider),
            &ingredients(&["milk", "rice", "egg"]),
            &settings,
            test_now(),
        )
        .await;

        assert_eq!(*provider.last_query.lock().unwrap(), ingredients(&["milk", "rice"]));
        Ok(())
    }

    #[tokio::test]
    async fn test_successful_lookup_is_cached() -> Result<()> {
        let db = setup_test_db().await?;
        let provider = StubProvider::new(external_recipes);
        let settings = RecipeSettings::default();
        let query = ingredients(&["rice", "egg"]);

        let first = fetch_candidates(&db, Some(&provider), &query, &settings, test_now()).await;
        let second = fetch_candidates(
            &db,
            Some(&provider),
            &query,
            &settings,
            test_now() + Duration::hours(1),
        )
        .await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(first, external_recipes().unwrap());
        assert_eq!(second, first);
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_cache_refetches() -> Result<()> {
        let db = setup_test_db().await?;
        let provider = StubProvider::new(external_recipes);
        let settings = RecipeSettings::default();
        let query = ingredients(&["rice", "egg"]);

        fetch_candidates(&db, Some(&provider), &query, &settings, test_now()).await;
        fetch_candidates(
            &db,
            Some(&provider),
            &query,
            &settings,
            test_now() + Duration::hours(settings.cache_ttl_hours + 1),
        )
        .await;

        assert_eq!(provider.calls(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_and_empty_are_not_cached() -> Result<()> {
        let db = setup_test_db().await?;
        let settings = RecipeSettings::default();
        let query = ingredients(&["rice"]);

        for answer in [unavailable as fn() -> Result<Vec<Recipe>>, no_recipes] {
            let provider = StubProvider::new(answer);
            let first = fetch_candidates(&db, Some(&provider), &query, &settings, test_now()).await;
            let second = fetch_candidates(&db, Some(&provider), &query, &settings, test_now()).await;

            assert_eq!(provider.calls(), 2);
            assert_eq!(first, fallback_recipes());
            assert_eq!(second, fallback_recipes());
        }
        Ok(())
    }
}
