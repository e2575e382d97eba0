//! Spoonacular recipe API client.
//!
//! A lookup is two steps: `recipes/findByIngredients` returns matching recipe
//! ids, then `recipes/{id}/information` is fetched for each hit. A hit whose
//! details can't be loaded is skipped; a failed search is reported as
//! [`Error::UpstreamUnavailable`].

use crate::{
    config::RecipeSettings,
    core::{
        matcher::normalize_ingredient,
        recipe::{Recipe, RecipeSource},
    },
    errors::{Error, Result},
    recipe_api::RecipeProvider,
};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";

const DEFAULT_COOKING_MINUTES: u32 = 30;
const DEFAULT_SERVINGS: u32 = 4;

/// Spoonacular HTTP client
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    id: i64,
    #[serde(default)]
    used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Deserialize)]
struct IngredientRef {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    id: i64,
    title: Option<String>,
    ready_in_minutes: Option<u32>,
    servings: Option<u32>,
    source_url: Option<String>,
    instructions: Option<String>,
    #[serde(default)]
    analyzed_instructions: Vec<AnalyzedInstruction>,
    #[serde(default)]
    extended_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    dish_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzedInstruction {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
struct InstructionStep {
    step: String,
}

impl SpoonacularClient {
    /// Creates a client for `api_key` using the base URL and timeout in `settings`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client can't be built.
    pub fn new(api_key: String, settings: &RecipeSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            api_key,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Creates a client if `SPOONACULAR_API_KEY` is set and non-empty.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the key is set but the HTTP client can't be built.
    pub fn from_env(settings: &RecipeSettings) -> Result<Option<Self>> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Self::new(key.trim().to_string(), settings).map(Some),
            _ => Ok(None),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("Spoonacular request to {path} failed: {e}");
                Error::UpstreamUnavailable {
                    message: format!("request failed: {e}"),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Spoonacular returned {status} for {path}");
            return Err(Error::UpstreamUnavailable {
                message: format!("{path} returned {status}"),
            });
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse Spoonacular response from {path}: {e}");
            Error::UpstreamUnavailable {
                message: format!("invalid response: {e}"),
            }
        })
    }

    async fn recipe_information(&self, recipe_id: i64) -> Result<RecipeInformation> {
        self.get_json(
            &format!("recipes/{recipe_id}/information"),
            &[("includeNutrition", "false".to_string())],
        )
        .await
    }
}

impl RecipeProvider for SpoonacularClient {
    async fn find_by_ingredients(&self, ingredients: &[String], limit: usize) -> Result<Vec<Recipe>> {
        debug!("Searching Spoonacular for {ingredients:?}");
        let hits: Vec<SearchHit> = self
            .get_json(
                "recipes/findByIngredients",
                &[
                    ("ingredients", ingredients.join(",")),
                    ("number", limit.to_string()),
                    ("ranking", "2".to_string()),
                    ("ignorePantry", "true".to_string()),
                ],
            )
            .await?;

        let mut recipes = Vec::with_capacity(hits.len());
        for hit in hits {
            match self.recipe_information(hit.id).await {
                Ok(info) => recipes.push(into_recipe(info, &hit)),
                Err(e) => warn!("Skipping recipe {}: {e}", hit.id),
            }
        }
        Ok(recipes)
    }
}

fn into_recipe(info: RecipeInformation, hit: &SearchHit) -> Recipe {
    let mut ingredients: Vec<String> = Vec::new();
    let names = if info.extended_ingredients.is_empty() {
        hit.used_ingredients
            .iter()
            .chain(&hit.missed_ingredients)
            .collect::<Vec<_>>()
    } else {
        info.extended_ingredients.iter().collect()
    };
    for ingredient in names {
        let name = normalize_ingredient(&ingredient.name);
        if !name.is_empty() && !ingredients.contains(&name) {
            ingredients.push(name);
        }
    }

    let steps: Vec<String> = info
        .analyzed_instructions
        .iter()
        .flat_map(|block| &block.steps)
        .map(|step| step.step.trim().trim_end_matches('.').to_string())
        .filter(|step| !step.is_empty())
        .collect();
    let instructions = if steps.is_empty() {
        info.instructions.unwrap_or_default()
    } else {
        format!("{}.", steps.join(". "))
    };

    let category = if info.dish_types.is_empty() {
        "General".to_string()
    } else {
        info.dish_types.join(", ")
    };

    Recipe {
        id: info.id.to_string(),
        name: info.title.unwrap_or_else(|| "Unknown Recipe".to_string()),
        ingredients,
        instructions,
        category,
        cooking_minutes: info.ready_in_minutes.unwrap_or(DEFAULT_COOKING_MINUTES),
        servings: info.servings.unwrap_or(DEFAULT_SERVINGS),
        source_url: info.source_url.filter(|url| !url.is_empty()),
        source: RecipeSource::ExternalApi,
    }
}
