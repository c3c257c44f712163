//! Catalog filter - Derives the visible product view from a fetched collection.
//!
//! This module is pure: it never touches the database, never mutates the input slice,
//! and never fails. Every call runs the same fixed pipeline (search, category,
//! price range, sort) so a given `(products, spec)` pair always yields the same view.

use crate::entities::ProductModel;
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Ordering applied to the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetical by name, A to Z
    #[default]
    NameAsc,
    /// Alphabetical by name, Z to A
    NameDesc,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl SortKey {
    /// Canonical string form, accepted back by `SortKey::from`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

/// Parses a sort key leniently. Anything unrecognized sorts by name ascending.
impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "name-desc" | "name-descending" => Self::NameDesc,
            "price" | "price-asc" | "price-ascending" => Self::PriceAsc,
            "price-desc" | "price-descending" => Self::PriceDesc,
            _ => Self::NameAsc,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed price interval `[min, max]`, inclusive on both ends.
///
/// An inverted interval (`min > max`) is tolerated and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lowest admitted price
    pub min: f64,
    /// Highest admitted price
    pub max: f64,
}

impl PriceRange {
    /// Creates a range without validating the bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true when `price` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Returns true when the bounds are inverted and the range admits nothing.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Unbounded above: admits every non-negative price until real data is loaded.
impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0.0, f64::INFINITY)
    }
}

/// Combined search, category, price and sort criteria for the listing page.
///
/// A spec is a value: each user interaction builds a new one through the `with_*`
/// methods rather than editing the current one in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Free-text query; empty (after trimming) means no search filter
    pub search_query: String,
    /// Category to restrict to; None or empty means all categories
    pub category_id: Option<String>,
    /// Inclusive price window
    pub price_range: PriceRange,
    /// Ordering of the surviving products
    pub sort_key: SortKey,
}

impl FilterSpec {
    /// Builds the default spec for a freshly loaded collection: no search, all
    /// categories, a price range covering every product, sorted by name.
    #[must_use]
    pub fn for_products(products: &[ProductModel]) -> Self {
        Self {
            price_range: default_price_range(products),
            ..Self::default()
        }
    }

    /// Returns a copy of this spec with a new search query.
    #[must_use]
    pub fn with_search(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self
        }
    }

    /// Returns a copy of this spec restricted to `category_id` (None for all).
    #[must_use]
    pub fn with_category(self, category_id: Option<String>) -> Self {
        Self {
            category_id: category_id.filter(|id| !id.is_empty()),
            ..self
        }
    }

    /// Returns a copy of this spec with a new price window.
    #[must_use]
    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..self
        }
    }

    /// Returns a copy of this spec with a new ordering.
    #[must_use]
    pub fn with_sort(self, sort_key: SortKey) -> Self {
        Self { sort_key, ..self }
    }
}

/// Applies `spec` to `products` and returns the visible view as a new vector.
///
/// Filters run in a fixed order (search, category, price range) and the survivors are
/// stable-sorted by `spec.sort_key`, so products with equal keys keep their input order.
/// Missing descriptions, empty input and inverted price ranges all yield a (possibly
/// empty) result rather than an error.
#[must_use]
pub fn apply(products: &[ProductModel], spec: &FilterSpec) -> Vec<ProductModel> {
    let query = spec.search_query.trim().to_lowercase();
    let mut visible: Vec<ProductModel> = products
        .iter()
        .filter(|product| passes(product, spec, &query))
        .cloned()
        .collect();

    // `sort_by` is stable
    visible.sort_by(|a, b| compare(a, b, spec.sort_key));
    visible
}

/// True when at least one product would be visible under `spec`. Same predicate as
/// [`apply`], without cloning or sorting.
#[must_use]
pub fn any_match(products: &[ProductModel], spec: &FilterSpec) -> bool {
    let query = spec.search_query.trim().to_lowercase();
    products.iter().any(|product| passes(product, spec, &query))
}

/// Search, category and price checks in pipeline order. `query` is trimmed and lowercased.
fn passes(product: &ProductModel, spec: &FilterSpec, query: &str) -> bool {
    let category = spec.category_id.as_deref().filter(|id| !id.is_empty());
    (query.is_empty() || matches_search(product, query))
        && category.is_none_or(|id| product.category_id.as_deref() == Some(id))
        && spec.price_range.contains(product.price)
}

/// Derives the initial price window for a collection: `[0, ceil(max price)]`,
/// or `[0, 0]` when the collection is empty.
#[must_use]
pub fn default_price_range(products: &[ProductModel]) -> PriceRange {
    let highest = products
        .iter()
        .map(|product| product.price)
        .filter(|price| price.is_finite())
        .fold(0.0_f64, f64::max);
    PriceRange::new(0.0, highest.ceil())
}

/// `query` must already be trimmed and lowercased.
fn matches_search(product: &ProductModel, query: &str) -> bool {
    product.name.to_lowercase().contains(query)
        || product
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(query))
}

fn compare(a: &ProductModel, b: &ProductModel, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::NameAsc => compare_names(&a.name, &b.name),
        SortKey::NameDesc => compare_names(&b.name, &a.name),
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
    }
}

/// Collation for display names. Base letters decide the order, so "Éclair" sorts
/// among the E's. Accents only break ties between otherwise equal names. Case never
/// matters: names that differ only by case compare equal and keep their input order.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    accented_letters(name).filter(|c| !is_combining_mark(*c))
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}
