//! Inventory business logic - Owner-scoped management of food items.
//!
//! Every function takes the owner's user id and only ever touches that owner's
//! rows. Looking up another user's item behaves exactly like looking up an item
//! that doesn't exist.

use crate::{
    core::matcher::normalize_ingredient,
    entities::{FoodCategory, FoodItem, food_item},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Unit stored when the user doesn't give one
pub const DEFAULT_UNIT: &str = "pieces";

/// Words stripped from item names before they're used as ingredient names
const MEASUREMENT_WORDS: &[&str] = &[
    "kg", "kgs", "gram", "grams", "g", "liter", "liters", "litre", "litres", "l", "ml", "cup",
    "cups", "tsp", "tbsp", "oz", "pound", "pounds", "lb", "lbs", "piece", "pieces", "pc", "pcs",
    "slice", "slices", "clove", "cloves", "bunch", "bunches", "pack", "packs", "bottle",
    "bottles", "can", "cans", "jar", "jars", "packet", "packets", "box", "boxes", "dozen",
    "dozens",
];

/// Fields for a new food item
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodItem {
    /// Item name
    pub name: String,
    /// Food category
    pub category: FoodCategory,
    /// Amount on hand, must be finite and positive
    pub quantity: f64,
    /// Unit for the amount; blank means [`DEFAULT_UNIT`]
    pub unit: String,
    /// Expiry date
    pub expiry_date: NaiveDate,
}

/// Partial update of a food item; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodItemChanges {
    /// New name
    pub name: Option<String>,
    /// New category
    pub category: Option<FoodCategory>,
    /// New quantity
    pub quantity: Option<f64>,
    /// New unit
    pub unit: Option<String>,
    /// New expiry date
    pub expiry_date: Option<NaiveDate>,
}

/// Listing filter; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Only items in this category
    pub category: Option<FoodCategory>,
    /// Case-insensitive substring of the item name
    pub search: Option<String>,
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Config {
            message: "Item name cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_quantity(quantity: f64) -> Result<f64> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(Error::InvalidQuantity { quantity });
    }
    Ok(quantity)
}

fn clean_unit(unit: &str) -> String {
    let trimmed = unit.trim();
    if trimmed.is_empty() {
        DEFAULT_UNIT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Expiry date suggested for a new item when the user gives none.
#[must_use]
pub fn default_expiry_date(today: NaiveDate, shelf_days: i64) -> NaiveDate {
    let days = Days::new(shelf_days.unsigned_abs());
    let shifted = if shelf_days >= 0 {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    };
    shifted.unwrap_or(today)
}

/// Logs a new food item for `user_id`.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The quantity is zero, negative, or not finite
/// - The database insert fails
#[instrument(skip(db, item), fields(name = %item.name))]
pub async fn create_food_item(
    db: &DatabaseConnection,
    user_id: &str,
    item: NewFoodItem,
) -> Result<food_item::Model> {
    let name = validate_name(&item.name)?;
    let quantity = validate_quantity(item.quantity)?;
    let now = chrono::Utc::now().naive_utc();

    let model = food_item::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name),
        category: Set(item.category),
        quantity: Set(quantity),
        unit: Set(clean_unit(&item.unit)),
        expiry_date: Set(item.expiry_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = model.insert(db).await?;
    debug!("Created food item #{}", created.id);
    Ok(created)
}

/// Lists `user_id`'s items matching `filter`, soonest expiry first, then by name.
///
/// The search is a case-insensitive substring match on the name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_food_items(
    db: &DatabaseConnection,
    user_id: &str,
    filter: &ItemFilter,
) -> Result<Vec<food_item::Model>> {
    let mut query = FoodItem::find().filter(food_item::Column::UserId.eq(user_id));

    if let Some(category) = filter.category {
        query = query.filter(food_item::Column::Category.eq(category));
    }

    let items = query
        .order_by_asc(food_item::Column::ExpiryDate)
        .order_by_asc(food_item::Column::Name)
        .all(db)
        .await?;

    // Plain substring match; '%' and '_' are literal.
    let search = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    Ok(match search {
        Some(needle) => items
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect(),
        None => items,
    })
}

/// Lists every item owned by `user_id`, soonest expiry first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_food_items(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<food_item::Model>> {
    list_food_items(db, user_id, &ItemFilter::default()).await
}

/// Finds one of `user_id`'s items by id.
///
/// # Errors
/// Returns an error if the database query fails. A missing or foreign
/// item is `Ok(None)`, not an error.
pub async fn get_food_item(
    db: &DatabaseConnection,
    user_id: &str,
    item_id: i64,
) -> Result<Option<food_item::Model>> {
    FoodItem::find_by_id(item_id)
        .filter(food_item::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

async fn find_owned(
    db: &DatabaseConnection,
    user_id: &str,
    item_id: i64,
) -> Result<food_item::Model> {
    get_food_item(db, user_id, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })
}

/// Applies `changes` to one of `user_id`'s items.
///
/// # Errors
/// Returns an error if:
/// - A new name is empty or a new quantity is invalid
/// - The item doesn't exist or belongs to someone else
/// - The database update fails
#[instrument(skip(db, changes))]
pub async fn update_food_item(
    db: &DatabaseConnection,
    user_id: &str,
    item_id: i64,
    changes: FoodItemChanges,
) -> Result<food_item::Model> {
    let name = changes.name.as_deref().map(validate_name).transpose()?;
    let quantity = changes.quantity.map(validate_quantity).transpose()?;

    let mut item: food_item::ActiveModel = find_owned(db, user_id, item_id).await?.into();

    if let Some(name) = name {
        item.name = Set(name);
    }
    if let Some(category) = changes.category {
        item.category = Set(category);
    }
    if let Some(quantity) = quantity {
        item.quantity = Set(quantity);
    }
    if let Some(unit) = changes.unit {
        item.unit = Set(clean_unit(&unit));
    }
    if let Some(expiry_date) = changes.expiry_date {
        item.expiry_date = Set(expiry_date);
    }
    item.updated_at = Set(chrono::Utc::now().naive_utc());

    item.update(db).await.map_err(Into::into)
}

/// Deletes one of `user_id`'s items and returns what was removed.
///
/// # Errors
/// Returns [`Error::ItemNotFound`] if the item doesn't exist or belongs to
/// someone else.
#[instrument(skip(db))]
pub async fn delete_food_item(
    db: &DatabaseConnection,
    user_id: &str,
    item_id: i64,
) -> Result<food_item::Model> {
    let item = find_owned(db, user_id, item_id).await?;
    FoodItem::delete_by_id(item.id).exec(db).await?;
    Ok(item)
}

/// Strips digits and measurement words from an item name and normalises it,
/// so "2 kg Basmati Rice" becomes "basmati rice".
#[must_use]
pub fn clean_ingredient_name(name: &str) -> String {
    let cleaned: Vec<String> = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !c.is_ascii_digit())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty() && !MEASUREMENT_WORDS.contains(&word.as_str()))
        .collect();
    normalize_ingredient(&cleaned.join(" "))
}

/// Ingredient names for recipe lookups, de-duplicated in item order.
///
/// Items come back soonest-expiry first, so the most urgent ingredients lead
/// the list and are the ones sent to the recipe service.
#[must_use]
pub fn ingredient_names(items: &[food_item::Model]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        let name = clean_ingredient_name(&item.name);
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
