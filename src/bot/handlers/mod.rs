//! Discord interaction handlers
//!
//! Handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for categories and item names
pub mod autocomplete;
