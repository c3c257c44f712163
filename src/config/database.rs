//! Database configuration for the catalog tables.
//!
//! The storefront reads a remote `products` table (and its `categories` companion)
//! through SeaORM. `DATABASE_URL` selects the backend; a local `SQLite` file is used when
//! it is unset. Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.

use crate::entities::{Category, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://fresh_basket.sqlite?mode=rwc";

/// Gets the database URL from the environment, falling back to the local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        debug!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
        DEFAULT_DATABASE_URL.to_string()
    })
}

/// Connects to the catalog database named by `DATABASE_URL`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    info!("Connecting to catalog database");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `categories` and `products` tables if they do not exist yet.
///
/// Categories are created first because products reference them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    let mut product_table = schema.create_table_from_entity(Product);

    category_table.if_not_exists();
    product_table.if_not_exists();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    Ok(())
}
