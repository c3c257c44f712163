/// Database connection and table creation
pub mod database;

/// Catalog seed loading from catalog.toml
pub mod catalog;

/// Storefront tunables from environment variables
pub mod storefront;
