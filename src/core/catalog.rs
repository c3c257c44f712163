//! Catalog seeding - Populates the store from a [`CatalogConfig`].
//!
//! Seeding is idempotent: categories and products are matched by name and existing
//! rows are left untouched, so running it against an already-seeded store is a no-op.

use crate::{
    config::catalog::CatalogConfig,
    core::product::{self, NewProduct},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use tracing::{debug, info};

/// Counts of rows created by [`seed_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Categories inserted
    pub categories_created: usize,
    /// Products inserted
    pub products_created: usize,
    /// Entries skipped because a row with the same name already existed
    pub skipped: usize,
}

/// Inserts every category and product from `config` that is not already present.
///
/// # Errors
/// Returns an error if a product names a category that is neither in the file nor in
/// the database, if a product fails validation, or if a database operation fails.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut category_ids: HashMap<String, String> = HashMap::new();

    for entry in &config.categories {
        let existing = product::get_category_by_name(db, entry.name.trim()).await?;
        let category = if let Some(category) = existing {
            debug!("Category '{}' already exists, skipping", category.name);
            summary.skipped += 1;
            category
        } else {
            summary.categories_created += 1;
            product::create_category(db, entry.id.clone(), &entry.name, entry.description.clone())
                .await?
        };
        category_ids.insert(category.name.clone(), category.id);
    }

    for entry in &config.products {
        if product::get_product_by_name(db, entry.name.trim())
            .await?
            .is_some()
        {
            debug!("Product '{}' already exists, skipping", entry.name.trim());
            summary.skipped += 1;
            continue;
        }

        let category_id = match entry.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(resolve_category(db, &category_ids, name).await?),
        };

        product::create_product(
            db,
            NewProduct {
                id: entry.id.clone(),
                name: entry.name.clone(),
                description: entry.description.clone(),
                price: entry.price,
                unit: entry.unit.clone(),
                category_id,
                stock_quantity: entry.stock_quantity,
                image_url: entry.image_url.clone(),
                is_featured: entry.is_featured,
            },
        )
        .await?;
        summary.products_created += 1;
    }

    info!(
        "Catalog seeded: {} categories, {} products created, {} skipped",
        summary.categories_created, summary.products_created, summary.skipped
    );
    Ok(summary)
}

async fn resolve_category(
    db: &DatabaseConnection,
    known: &HashMap<String, String>,
    name: &str,
) -> Result<String> {
    if let Some(id) = known.get(name) {
        return Ok(id.clone());
    }

    product::get_category_by_name(db, name)
        .await?
        .map(|category| category.id)
        .ok_or_else(|| Error::Config {
            message: format!("Unknown category '{name}' in catalog"),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::product::{Fetcher, TableFetcher};
    use crate::test_utils::setup_test_db;

    const SEED: &str = r#"
        [[categories]]
        id = "fruit"
        name = "Fruit"

        [[categories]]
        name = "Vegetables"

        [[products]]
        name = "Fresh Apples"
        price = 4.99
        unit = "kg"
        category = "Fruit"
        is_featured = true

        [[products]]
        name = "Green Lettuce"
        price = 2.99
        unit = "piece"
        category = "Vegetables"

        [[products]]
        name = "Sea Salt"
        price = 1.25
        unit = "bag"
    "#;

    #[tokio::test]
    async fn test_seed_catalog_creates_rows() -> Result<()> {
        let db = setup_test_db().await?;
        let config: CatalogConfig = toml::from_str(SEED).unwrap();

        let summary = seed_catalog(&db, &config).await?;
        assert_eq!(summary.categories_created, 2);
        assert_eq!(summary.products_created, 3);
        assert_eq!(summary.skipped, 0);

        let fetcher = TableFetcher::new(db);
        let products = fetcher.list_products().await?;
        let apples = products.iter().find(|p| p.name == "Fresh Apples").unwrap();
        assert_eq!(apples.category_id.as_deref(), Some("fruit"));
        let salt = products.iter().find(|p| p.name == "Sea Salt").unwrap();
        assert!(salt.category_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config: CatalogConfig = toml::from_str(SEED).unwrap();

        seed_catalog(&db, &config).await?;
        let second = seed_catalog(&db, &config).await?;
        assert_eq!(second.categories_created, 0);
        assert_eq!(second.products_created, 0);
        assert_eq!(second.skipped, 5);

        let products = TableFetcher::new(db).list_products().await?;
        assert_eq!(products.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_rejects_unknown_category() -> Result<()> {
        let db = setup_test_db().await?;
        let config: CatalogConfig = toml::from_str(
            r#"
            [[products]]
            name = "Oat Milk"
            price = 2.49
            unit = "carton"
            category = "Dairy"
            "#,
        )
        .unwrap();

        let result = seed_catalog(&db, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Config { .. }));

        Ok(())
    }
}
