//! Landing page - hero banner, feature blurbs and a short list of featured products.

use crate::{
    core::{notify::Notifier, product::Fetcher},
    entities::ProductModel,
};
use tracing::{error, info};

pub const HERO_TITLE: &str = "Fresh From Farm To Your Table";
pub const HERO_SUBTITLE: &str = "Discover nature's finest selection of fresh fruits and \
vegetables, delivered right to your doorstep.";

/// A selling point shown under the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Fresh & Organic",
        description: "Hand-picked fresh produce from local farmers",
    },
    Feature {
        title: "Fast Delivery",
        description: "Same day delivery for your convenience",
    },
    Feature {
        title: "Best Prices",
        description: "Competitive prices for premium quality",
    },
];

/// Landing page state.
#[derive(Debug)]
pub struct LandingPage {
    featured: Vec<ProductModel>,
    loading: bool,
    limit: u64,
    notifier: Notifier,
}

impl LandingPage {
    /// A page that will show at most `limit` featured products once loaded.
    #[must_use]
    pub const fn new(limit: u64, notifier: Notifier) -> Self {
        Self {
            featured: Vec::new(),
            loading: true,
            limit,
            notifier,
        }
    }

    /// Fetches the featured products. On failure the user is notified and any
    /// previously loaded products stay on the page.
    pub async fn load<F: Fetcher>(&mut self, fetcher: &F) {
        self.loading = true;
        match fetcher.list_featured(self.limit).await {
            Ok(featured) => {
                info!("Landing page loaded {} featured products", featured.len());
                self.featured = featured;
            }
            Err(e) => {
                error!("Error fetching featured products: {}", e);
                self.notifier.error("Failed to load featured products");
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn featured(&self) -> &[ProductModel] {
        &self.featured
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::{self, Level};
    use crate::test_utils::{StubFetcher, grocery_products};

    #[tokio::test]
    async fn test_load_featured_products() {
        let (notifier, mut rx) = notify::channel();
        let mut products = grocery_products();
        products[1].is_featured = true;
        let fetcher = StubFetcher::with_products(products);

        let mut page = LandingPage::new(3, notifier);
        assert!(page.is_loading());
        page.load(&fetcher).await;

        assert!(!page.is_loading());
        assert_eq!(page.featured().len(), 1);
        assert_eq!(page.featured()[0].name, "Fresh Apples");
        assert!(notify::drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies() {
        let (notifier, mut rx) = notify::channel();
        let mut page = LandingPage::new(3, notifier);
        page.load(&StubFetcher::failing()).await;

        assert!(!page.is_loading());
        assert!(page.featured().is_empty());
        let queued = notify::drain(&mut rx);
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].level, Level::Error);
    }

    #[test]
    fn test_feature_blurbs() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Fresh & Organic", "Fast Delivery", "Best Prices"]);
    }
}
