//! Unified error types for the storefront core.
//!
//! Filtering never fails; every variant here belongs to the data boundary
//! (configuration, the product table, catalog administration).

use thiserror::Error;

/// Errors surfaced by configuration, seeding and the product fetcher.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable cause
        message: String,
    },

    /// The backing product table rejected a query
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A price was negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// A catalog record failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Which field was rejected and why
        message: String,
    },

    /// Retrieving data from the backend failed
    #[error("Failed to fetch {message}")]
    FetchFailure {
        /// What was being fetched
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
