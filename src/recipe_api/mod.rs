//! External recipe sources.
//!
//! A [`RecipeProvider`] answers "what can I cook with these ingredients?" with
//! an explicit `Result`: `Ok` with the recipes found (possibly none), or
//! `Err(Error::UpstreamUnavailable)` when the service can't be reached. The
//! fallback decision is made by the caller, never inside a provider.

/// Spoonacular API client
pub mod spoonacular;

use crate::{core::recipe::Recipe, errors::Result};
use std::future::Future;

pub use spoonacular::SpoonacularClient;

/// A source of recipes searchable by ingredient
pub trait RecipeProvider {
    /// Finds up to `limit` recipes that use some of `ingredients`.
    fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Recipe>>> + Send;
}
