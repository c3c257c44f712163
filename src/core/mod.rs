//! Core storefront logic - framework-agnostic filtering, fetching and input timing.

/// Catalog seeding from `catalog.toml`
pub mod catalog;
/// Debounced delivery of input values
pub mod debounce;
/// Pure filter/sort pipeline over a fetched product collection
pub mod filter;
/// Notification channel from the data boundary to the presentation layer
pub mod notify;
/// Product table access and catalog row creation
pub mod product;
