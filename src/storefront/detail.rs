//! Product detail page.

use crate::{
    core::{notify::Notifier, product::Fetcher},
    entities::ProductModel,
};
use tracing::{error, info};

/// What the detail page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Fetch in flight
    Loading,
    /// The requested product
    Loaded(Box<ProductModel>),
    /// No product with this identifier (or it could not be fetched)
    NotFound,
}

/// Detail page for one product identifier taken from the route.
#[derive(Debug)]
pub struct DetailPage {
    product_id: String,
    state: DetailState,
    notifier: Notifier,
}

impl DetailPage {
    #[must_use]
    pub fn new(product_id: impl Into<String>, notifier: Notifier) -> Self {
        Self {
            product_id: product_id.into(),
            state: DetailState::Loading,
            notifier,
        }
    }

    /// Fetches the product.
    ///
    /// A missing row is a normal not-found state and is not reported as an error. A
    /// failed fetch notifies the user and keeps an already loaded product on screen.
    pub async fn load<F: Fetcher>(&mut self, fetcher: &F) {
        if self.product_id.trim().is_empty() {
            self.state = DetailState::NotFound;
            return;
        }

        match fetcher.get_product(&self.product_id).await {
            Ok(Some(product)) => {
                info!("Loaded product {}", product.id);
                self.state = DetailState::Loaded(Box::new(product));
            }
            Ok(None) => {
                info!("Product {} not found", self.product_id);
                self.state = DetailState::NotFound;
            }
            Err(e) => {
                error!("Error fetching product {}: {}", self.product_id, e);
                self.notifier.error("Failed to load product details");
                if self.state == DetailState::Loading {
                    self.state = DetailState::NotFound;
                }
            }
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    #[must_use]
    pub fn product(&self) -> Option<&ProductModel> {
        match &self.state {
            DetailState::Loaded(product) => Some(product.as_ref()),
            DetailState::Loading | DetailState::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify;
    use crate::test_utils::{StubFetcher, grocery_products};

    #[tokio::test]
    async fn test_load_existing_product() {
        let (notifier, mut rx) = notify::channel();
        let fetcher = StubFetcher::with_products(grocery_products());
        let mut page = DetailPage::new("p-apples", notifier);
        assert_eq!(page.state(), &DetailState::Loading);

        page.load(&fetcher).await;
        assert_eq!(page.product().map(|p| p.name.as_str()), Some("Fresh Apples"));
        assert!(notify::drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found_without_notification() {
        let (notifier, mut rx) = notify::channel();
        let fetcher = StubFetcher::with_products(grocery_products());
        let mut page = DetailPage::new("nope", notifier);

        page.load(&fetcher).await;
        assert_eq!(page.state(), &DetailState::NotFound);
        assert!(notify::drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_blank_id_is_not_found() {
        let (notifier, _rx) = notify::channel();
        let mut page = DetailPage::new("  ", notifier);
        page.load(&StubFetcher::failing()).await;
        assert_eq!(page.state(), &DetailState::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_failure_notifies_and_keeps_loaded_product() {
        let (notifier, mut rx) = notify::channel();
        let mut page = DetailPage::new("p-apples", notifier);

        page.load(&StubFetcher::failing()).await;
        assert_eq!(page.state(), &DetailState::NotFound);
        assert_eq!(notify::drain(&mut rx).len(), 1);

        page.load(&StubFetcher::with_products(grocery_products()))
            .await;
        assert!(page.product().is_some());

        page.load(&StubFetcher::failing()).await;
        assert!(page.product().is_some());
        let queued = notify::drain(&mut rx);
        assert_eq!(queued[0].message, "Failed to load product details");
    }
}
