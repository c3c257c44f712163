//! Path routing between storefront pages.

use std::fmt;

/// A page the storefront can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/products`
    Products,
    /// `/products/{id}`
    Product(String),
    /// `/about`
    About,
    /// `/cart`
    Cart,
    /// Any other path
    NotFound(String),
}

impl Route {
    /// Resolves a path. Trailing slashes and a query string are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["products"] => Self::Products,
            ["products", id] => Self::Product((*id).to_string()),
            ["about"] => Self::About,
            ["cart"] => Self::Cart,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::Product(id) => format!("/products/{id}"),
            Self::About => "/about".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
