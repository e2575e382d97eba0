//! Core business logic - framework-agnostic inventory, expiry, and recipe operations.
//!
//! Expiry, dashboard and cache logic take the current date or time as a parameter.

/// Inventory dashboard summary
pub mod dashboard;
/// Expiry status calculation
pub mod expiry;
/// Built-in fallback recipes
pub mod fallback;
/// Owner-scoped food item management
pub mod inventory;
/// Recipe scoring and ranking
pub mod matcher;
/// Recipe value types
pub mod recipe;
/// Time-boxed cache of external recipe lookups
pub mod recipe_cache;
/// Candidate resolution with the fallback policy
pub mod recipes;
