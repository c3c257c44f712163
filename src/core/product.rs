//! Product business logic - Reads the catalog tables and validates new catalog rows.
//!
//! The storefront treats the backend table as an external collaborator. Pages talk to it
//! only through the [`Fetcher`] trait, so a view can be driven by the real table client
//! ([`TableFetcher`]) or by a stub in tests. Creation functions exist for seeding a store
//! and are not used by the pages themselves.

use crate::{
    entities::{Category, CategoryModel, Product, ProductModel, category, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use std::future::Future;
use tracing::{debug, instrument};

/// Query boundary between the storefront pages and the product table.
pub trait Fetcher {
    /// Loads the full product collection ordered by name.
    fn list_products(&self) -> impl Future<Output = Result<Vec<ProductModel>>> + Send;

    /// Loads at most `limit` featured products ordered by name.
    fn list_featured(&self, limit: u64)
    -> impl Future<Output = Result<Vec<ProductModel>>> + Send;

    /// Loads one product, `None` when the identifier has no matching row.
    fn get_product(&self, id: &str) -> impl Future<Output = Result<Option<ProductModel>>> + Send;

    /// Loads every category ordered by name.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<CategoryModel>>> + Send;
}

/// [`Fetcher`] backed by a SeaORM connection to the catalog tables.
#[derive(Debug)]
pub struct TableFetcher {
    db: DatabaseConnection,
}

impl TableFetcher {
    /// Wraps an open connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Borrows the underlying connection, e.g. for seeding.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl Fetcher for TableFetcher {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<ProductModel>> {
        let products = Product::find()
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| fetch_failure("products", &e))?;
        debug!("Fetched {} products", products.len());
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_featured(&self, limit: u64) -> Result<Vec<ProductModel>> {
        Product::find()
            .filter(product::Column::IsFeatured.eq(true))
            .order_by_asc(product::Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| fetch_failure("featured products", &e))
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> Result<Option<ProductModel>> {
        Product::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| fetch_failure("product", &e))
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<CategoryModel>> {
        Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| fetch_failure("categories", &e))
    }
}

fn fetch_failure(what: &str, e: &DbErr) -> Error {
    Error::FetchFailure {
        message: format!("{what}: {e}"),
    }
}

/// Fields required to list a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Explicit identifier; a random UUID is generated when absent
    pub id: Option<String>,
    /// Display name, trimmed before insert
    pub name: String,
    /// Free text matched by storefront search alongside the name
    pub description: Option<String>,
    /// Price per unit, finite and non-negative
    pub price: f64,
    /// Selling unit shown after the price, e.g. "kg"
    pub unit: String,
    /// Owning category, `None` for uncategorized products
    pub category_id: Option<String>,
    /// Units in stock; informational only
    pub stock_quantity: i32,
    /// Product photo; renderers fall back to a placeholder when absent
    pub image_url: Option<String>,
    /// Shown in the landing page's featured row
    pub is_featured: bool,
}

impl NewProduct {
    /// A minimal uncategorized, non-featured product with no stock.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            unit: unit.into(),
            category_id: None,
            stock_quantity: 0,
            image_url: None,
            is_featured: false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "Product name cannot be empty".to_string(),
            });
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::InvalidAmount { amount: self.price });
        }

        if self.unit.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: format!("Product '{}' needs a unit", self.name.trim()),
            });
        }

        if self.stock_quantity < 0 {
            return Err(Error::InvalidInput {
                message: format!(
                    "Stock quantity for '{}' cannot be negative",
                    self.name.trim()
                ),
            });
        }

        Ok(())
    }
}

/// Inserts a validated product row.
///
/// # Errors
/// Returns an error if:
/// - The name or unit is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The stock quantity is negative
/// - The database insert operation fails
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<ProductModel> {
    new.validate()?;

    let now = chrono::Utc::now().naive_utc();
    let id = new
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let product = product::ActiveModel {
        id: Set(id),
        name: Set(new.name.trim().to_string()),
        description: Set(new.description),
        price: Set(new.price),
        unit: Set(new.unit.trim().to_string()),
        category_id: Set(new.category_id),
        stock_quantity: Set(new.stock_quantity),
        image_url: Set(new.image_url),
        is_featured: Set(new.is_featured),
        created_at: Set(now),
        updated_at: Set(now),
    };
    product.insert(db).await.map_err(Into::into)
}

/// Inserts a category row with a generated identifier unless one is given.
///
/// # Errors
/// Returns an error if the name is empty or the insert fails.
pub async fn create_category(
    db: &DatabaseConnection,
    id: Option<String>,
    name: &str,
    description: Option<String>,
) -> Result<CategoryModel> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now().naive_utc();
    let category = category::ActiveModel {
        id: Set(id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
        name: Set(name.trim().to_string()),
        description: Set(description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    category.insert(db).await.map_err(Into::into)
}

/// Looks a product up by exact name, used by seeding to stay idempotent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<ProductModel>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Looks a category up by exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<CategoryModel>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}
