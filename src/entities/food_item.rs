//! Food item entity - A single item in a user's kitchen inventory.
//!
//! Each item belongs to exactly one owner (the Discord user who logged it).
//! Expiry status is never stored here; it is derived from `expiry_date` on
//! every read so it can't go stale.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::Error;

/// Food category, stored as its lowercase string value
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Fresh fruit
    #[sea_orm(string_value = "fruit")]
    Fruit,
    /// Fresh vegetables
    #[sea_orm(string_value = "vegetable")]
    Vegetable,
    /// Milk, cheese, yogurt, butter
    #[sea_orm(string_value = "dairy")]
    Dairy,
    /// Meat, poultry, fish
    #[sea_orm(string_value = "meat")]
    Meat,
    /// Rice, flour, bread, pasta
    #[sea_orm(string_value = "grain")]
    Grain,
    /// Canned food
    #[sea_orm(string_value = "canned")]
    Canned,
    /// Drinks
    #[sea_orm(string_value = "beverage")]
    Beverage,
    /// Snacks
    #[sea_orm(string_value = "snack")]
    Snack,
    /// Spices and condiments
    #[sea_orm(string_value = "spice")]
    Spice,
    /// Anything else
    #[sea_orm(string_value = "other")]
    Other,
}

impl FoodCategory {
    /// Every category, in display order
    pub const ALL: [Self; 10] = [
        Self::Fruit,
        Self::Vegetable,
        Self::Dairy,
        Self::Meat,
        Self::Grain,
        Self::Canned,
        Self::Beverage,
        Self::Snack,
        Self::Spice,
        Self::Other,
    ];

    /// Stable lowercase identifier, identical to the stored value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Grain => "grain",
            Self::Canned => "canned",
            Self::Beverage => "beverage",
            Self::Snack => "snack",
            Self::Spice => "spice",
            Self::Other => "other",
        }
    }

    /// Human-friendly label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fruit => "Fruit",
            Self::Vegetable => "Vegetable",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Grain => "Grain",
            Self::Canned => "Canned Food",
            Self::Beverage => "Beverage",
            Self::Snack => "Snack",
            Self::Spice => "Spice/Condiment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::InvalidCategory {
                input: s.to_string(),
            })
    }
}

/// Food item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the owner
    pub user_id: String,
    /// Item name as typed by the user (e.g., "Milk", "Basmati Rice")
    pub name: String,
    /// Food category
    pub category: FoodCategory,
    /// How much of the item is on hand
    pub quantity: f64,
    /// Unit for `quantity` (e.g., "kg", "pieces", "bottle")
    pub unit: String,
    /// Calendar date the item expires
    pub expiry_date: Date,
    /// When the item was logged
    pub created_at: DateTime,
    /// When the item was last edited
    pub updated_at: DateTime,
}

/// Food items have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
