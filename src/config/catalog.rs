//! Catalog seed configuration loaded from `catalog.toml`.
//!
//! The file lists categories and products used to populate an empty store. Products
//! refer to their category by name so the file stays readable without identifiers.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the seed file.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Categories to create
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
    /// Products to create
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

/// A category entry
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Optional fixed identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, referenced by products
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A product entry
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Optional fixed identifier
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub unit: String,
    /// Name of a category declared in the same file
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Loads the catalog seed from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the catalog seed from the default location (./catalog.toml)
pub fn load_default_catalog() -> Result<CatalogConfig> {
    load_catalog(DEFAULT_CATALOG_PATH)
}
