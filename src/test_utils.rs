//! Shared test utilities for `PantryBuddy`.
//!
//! Helpers for setting up an in-memory database and building food items with
//! sensible defaults.

use crate::{
    core::inventory::{self, NewFoodItem},
    entities::{FoodCategory, food_item},
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;

/// Owner used by most tests
pub const TEST_USER: &str = "test_user";
/// A second owner, for scoping tests
pub const OTHER_USER: &str = "other_user";

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed "today" so date arithmetic in tests is reproducible.
#[allow(clippy::unwrap_used)]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Noon on [`test_today`].
#[allow(clippy::unwrap_used)]
pub fn test_now() -> NaiveDateTime {
    test_today().and_hms_opt(12, 0, 0).unwrap()
}

/// A dairy item with quantity 1 and the default unit.
pub fn new_item(name: &str, expiry_date: NaiveDate) -> NewFoodItem {
    NewFoodItem {
        name: name.to_string(),
        category: FoodCategory::Dairy,
        quantity: 1.0,
        unit: inventory::DEFAULT_UNIT.to_string(),
        expiry_date,
    }
}

/// Inserts a food item with the defaults of [`new_item`].
pub async fn create_test_item(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    expiry_date: NaiveDate,
) -> Result<food_item::Model> {
    inventory::create_food_item(db, user_id, new_item(name, expiry_date)).await
}

/// An unsaved model for pure-function tests.
pub fn test_model(id: i64, name: &str, expiry_date: NaiveDate) -> food_item::Model {
    food_item::Model {
        id,
        user_id: TEST_USER.to_string(),
        name: name.to_string(),
        category: FoodCategory::Dairy,
        quantity: 1.0,
        unit: inventory::DEFAULT_UNIT.to_string(),
        expiry_date,
        created_at: test_now(),
        updated_at: test_now(),
    }
}
