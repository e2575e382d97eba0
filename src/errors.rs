//! Unified error type for `PantryBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants carry
//! enough context for the bot layer to render a useful message.

use thiserror::Error;

/// Crate-wide error enum
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or rejected input that has no dedicated variant
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any failure reported by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Expiry date was missing or could not be parsed
    #[error("Invalid expiry date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw text that failed to parse
        input: String,
    },

    /// Quantity was zero, negative, or not a finite number
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: f64,
    },

    /// Category text did not name a known food category
    #[error("Unknown food category '{input}'")]
    InvalidCategory {
        /// The raw text that failed to parse
        input: String,
    },

    /// No food item with this id exists for the requesting owner
    #[error("Food item #{id} not found")]
    ItemNotFound {
        /// The requested item id
        id: i64,
    },

    /// The external recipe service failed or is not configured
    #[error("Recipe service unavailable: {message}")]
    UpstreamUnavailable {
        /// What went wrong upstream
        message: String,
    },

    /// JSON encoding/decoding failure (recipe cache payloads)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required environment variable missing or invalid
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error bubbled up from serenity/poise
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
