//! Recipe cache entity - Stores external recipe lookups keyed by query.
//!
//! The payload is the JSON-encoded list of recipes returned for the query,
//! and `fetched_at` decides whether the entry is still fresh.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe cache database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_cache")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Deterministic key built from the query ingredients and limit
    #[sea_orm(unique)]
    pub cache_key: String,
    /// JSON array of recipes
    pub payload: String,
    /// When the payload was fetched from the recipe service
    pub fetched_at: DateTime,
}

/// `RecipeCache` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
