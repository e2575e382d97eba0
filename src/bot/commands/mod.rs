//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Inventory dashboard command
pub mod dashboard;

/// General utility commands
pub mod general;

/// Food item management commands
pub mod item;

/// Recipe suggestion commands
pub mod recipe;

// Export commands
pub use dashboard::*;
pub use general::*;
pub use item::*;
pub use recipe::*;
