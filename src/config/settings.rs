//! Application settings loaded from `config.toml`.
//!
//! Every field has a default, so the file is optional and may list only the
//! values that differ. Secrets (bot token, API key) stay in the environment.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Top-level structure of `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Recipe suggestion settings
    pub recipes: RecipeSettings,
    /// Inventory defaults
    pub inventory: InventorySettings,
}

/// Settings for the external recipe service and suggestion output
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecipeSettings {
    /// Base URL of the Spoonacular API
    pub api_base_url: String,
    /// How many recipes to request and display
    pub suggestion_limit: usize,
    /// How many inventory ingredients are sent with a lookup
    pub max_query_ingredients: usize,
    /// How long a cached lookup stays fresh
    pub cache_ttl_hours: i64,
    /// Per-request timeout for the recipe service
    pub request_timeout_secs: u64,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.spoonacular.com".to_string(),
            suggestion_limit: 12,
            max_query_ingredients: 5,
            cache_ttl_hours: 4,
            request_timeout_secs: 15,
        }
    }
}

/// Defaults applied when logging new items
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    /// Expiry offset used when `/item add` is given no date
    pub default_shelf_days: i64,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            default_shelf_days: 7,
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Loading configuration from {}", path_ref.display());
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the text is not valid TOML or has wrongly typed values.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads `./config.toml`, or the defaults if the file doesn't exist.
///
/// # Errors
/// Returns an error if `config.toml` exists but can't be read or parsed.
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_config(path)
    } else {
        info!("No config.toml found, using default settings.");
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [recipes]
            suggestion_limit = 5

            [inventory]
            default_shelf_days = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.recipes.suggestion_limit, 5);
        assert_eq!(config.recipes.max_query_ingredients, 5);
        assert_eq!(config.recipes.cache_ttl_hours, 4);
        assert_eq!(config.recipes.api_base_url, "https://api.spoonacular.com");
        assert_eq!(config.inventory.default_shelf_days, 3);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.recipes.suggestion_limit, 12);
        assert_eq!(config.inventory.default_shelf_days, 7);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[recipes]\nsuggestion_limit = \"many\"");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
