//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod food_item;
pub mod recipe_cache;

pub use food_item::{
    Column as FoodItemColumn, Entity as FoodItem, FoodCategory, Model as FoodItemModel,
};
pub use recipe_cache::{
    Column as RecipeCacheColumn, Entity as RecipeCache, Model as RecipeCacheModel,
};
