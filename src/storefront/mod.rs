//! Storefront pages - view models for the navbar, landing, listing and detail pages.
//!
//! Each page owns its state and exposes explicit loading / empty / not-found flags.
//! Pages fetch through [`crate::core::product::Fetcher`] and report failures on a
//! [`crate::core::notify::Notifier`]; they never return fetch errors to the caller.
//! Turning page state into text is the job of [`render`].

/// Product detail page
pub mod detail;
/// Landing page with hero, feature blurbs and featured products
pub mod landing;
/// Product listing page with search, filters and sort
pub mod listing;
/// Top navigation bar
pub mod navbar;
/// Text rendering of page state
pub mod render;
/// Path routing between pages
pub mod routes;

pub use detail::{DetailPage, DetailState};
pub use landing::LandingPage;
pub use listing::ListingPage;
pub use navbar::Navbar;
pub use routes::Route;

/// How the listing page arranges products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Cards in rows
    #[default]
    Grid,
    /// One product per line
    List,
}
