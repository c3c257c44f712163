//! Shared test utilities for the storefront.
//!
//! This module provides helpers for setting up test databases, building product
//! records without a database, and an in-memory [`Fetcher`] for page tests.

use crate::{
    core::product::{self, Fetcher, NewProduct},
    entities::{CategoryModel, ProductModel},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a product record in memory.
///
/// # Defaults
/// * `unit`: "kg"
/// * `description`, `category_id`, `image_url`: None
/// * `stock_quantity`: 0
/// * `is_featured`: false
pub fn sample_product(id: &str, name: &str, price: f64) -> ProductModel {
    let now = chrono::Utc::now().naive_utc();
    ProductModel {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price,
        unit: "kg".to_string(),
        category_id: None,
        stock_quantity: 0,
        image_url: None,
        is_featured: false,
        created_at: now,
        updated_at: now,
    }
}

/// Builds a category record in memory with no description.
pub fn sample_category(id: &str, name: &str) -> CategoryModel {
    let now = chrono::Utc::now().naive_utc();
    CategoryModel {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

/// The three storefront staples, in this input order:
/// Green Lettuce ($2.99), Fresh Apples ($4.99), Organic Tomatoes ($3.99).
pub fn grocery_products() -> Vec<ProductModel> {
    vec![
        sample_product("p-lettuce", "Green Lettuce", 2.99),
        sample_product("p-apples", "Fresh Apples", 4.99),
        sample_product("p-tomatoes", "Organic Tomatoes", 3.99),
    ]
}

/// Sets up a database with a "Fruit & Veg" category and the three staples in it.
/// Apples and tomatoes are featured, lettuce is not.
/// Returns (db, category).
pub async fn setup_with_catalog() -> Result<(DatabaseConnection, CategoryModel)> {
    let db = setup_test_db().await?;
    let category = product::create_category(&db, None, "Fruit & Veg", None).await?;

    for staple in grocery_products() {
        let mut new = NewProduct::new(staple.name.clone(), staple.price, staple.unit);
        new.id = Some(staple.id);
        new.category_id = Some(category.id.clone());
        new.is_featured = staple.name != "Green Lettuce";
        product::create_product(&db, new).await?;
    }

    Ok((db, category))
}

/// In-memory [`Fetcher`] that mirrors the table client's ordering, or fails every call.
#[derive(Debug, Clone, Default)]
pub struct StubFetcher {
    products: Vec<ProductModel>,
    categories: Vec<CategoryModel>,
    fail: bool,
}

impl StubFetcher {
    pub fn with_products(products: Vec<ProductModel>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Adds the categories returned by `list_categories`.
    #[must_use]
    pub fn with_categories(self, categories: Vec<CategoryModel>) -> Self {
        Self { categories, ..self }
    }

    /// A fetcher whose every call fails like an unreachable backend.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self, what: &str) -> Result<()> {
        if self.fail {
            return Err(Error::FetchFailure {
                message: what.to_string(),
            });
        }
        Ok(())
    }

    fn sorted(&self) -> Vec<ProductModel> {
        let mut products = self.products.clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

impl Fetcher for StubFetcher {
    async fn list_products(&self) -> Result<Vec<ProductModel>> {
        self.check("products")?;
        Ok(self.sorted())
    }

    async fn list_featured(&self, limit: u64) -> Result<Vec<ProductModel>> {
        self.check("featured products")?;
        Ok(self
            .sorted()
            .into_iter()
            .filter(|p| p.is_featured)
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn get_product(&self, id: &str) -> Result<Option<ProductModel>> {
        self.check("product")?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        self.check("categories")?;
        Ok(self.categories.clone())
    }
}
