//! Product listing page - the full catalog with search, category, price and sort controls.
//!
//! The collection is fetched once per page lifetime. Every control builds a new
//! [`FilterSpec`]; the visible products are recomputed from the collection on demand.
//! Search input is debounced: [`ListingPage::set_search`] only records what was typed
//! and arms the debouncer, and the query takes effect when the debounced value is
//! committed through [`ListingPage::next_search`] or [`ListingPage::poll_search`].
//! Category, price and sort changes apply immediately.

use super::Layout;
use crate::{
    config::storefront::StorefrontSettings,
    core::{
        debounce::Debouncer,
        filter::{self, FilterSpec, PriceRange, SortKey},
        notify::Notifier,
        product::Fetcher,
    },
    entities::{CategoryModel, ProductModel},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Listing page state.
#[derive(Debug)]
pub struct ListingPage {
    products: Vec<ProductModel>,
    categories: Vec<CategoryModel>,
    spec: FilterSpec,
    search_input: String,
    loading: bool,
    layout: Layout,
    search: Debouncer<String>,
    search_rx: mpsc::UnboundedReceiver<String>,
    notifier: Notifier,
}

impl ListingPage {
    /// A freshly mounted page: loading, no products, default filters.
    #[must_use]
    pub fn new(settings: &StorefrontSettings, notifier: Notifier) -> Self {
        let (search, search_rx) = Debouncer::new(settings.search_debounce);
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            spec: FilterSpec::for_products(&[]),
            search_input: String::new(),
            loading: true,
            layout: Layout::default(),
            search,
            search_rx,
            notifier,
        }
    }

    /// Fetches the product collection and the categories for the filter control.
    ///
    /// On success the price range is reset to cover every product. On failure the user
    /// is notified and the previous (possibly empty) collection stays in place.
    pub async fn load<F: Fetcher>(&mut self, fetcher: &F) {
        self.loading = true;

        match fetcher.list_products().await {
            Ok(products) => {
                info!("Listing page loaded {} products", products.len());
                let range = filter::default_price_range(&products);
                self.products = products;
                self.replace_spec(|spec| spec.with_price_range(range));
            }
            Err(e) => {
                error!("Error fetching products: {}", e);
                self.notifier.error("Failed to load products");
            }
        }

        match fetcher.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                error!("Error fetching categories: {}", e);
                self.notifier.error("Failed to load categories");
            }
        }

        self.loading = false;
    }

    /// Records typed search text and schedules it to take effect after the quiet window.
    ///
    /// A value that already fired but was not yet committed is discarded, so only the
    /// newest text can ever reach the filter.
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.search_input.clone_from(&query);
        self.discard_pending_search();
        self.search.schedule(query);
    }

    /// Waits for the next debounced search value and applies it.
    pub async fn next_search(&mut self) {
        if let Some(query) = self.search_rx.recv().await {
            self.apply_search(query);
        }
    }

    /// Applies the most recent debounced search value, if one has fired, without waiting.
    /// Returns true if the filter changed.
    pub fn poll_search(&mut self) -> bool {
        let mut latest = None;
        while let Ok(query) = self.search_rx.try_recv() {
            latest = Some(query);
        }
        latest.is_some_and(|query| {
            self.apply_search(query);
            true
        })
    }

    /// Applies a search query immediately, bypassing the debouncer.
    pub fn apply_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        debug!("Search committed: {:?}", query);
        self.search_input.clone_from(&query);
        self.replace_spec(|spec| spec.with_search(query));
    }

    /// Restricts the view to one category, `None` (or an empty id) shows all.
    pub fn set_category(&mut self, category_id: Option<String>) {
        self.replace_spec(|spec| spec.with_category(category_id));
    }

    /// Replaces the inclusive price bounds. An inverted range empties the view.
    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.replace_spec(|spec| spec.with_price_range(price_range));
    }

    /// Changes the display order.
    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.replace_spec(|spec| spec.with_sort(sort_key));
    }

    /// Switches between grid and list presentation; filters are unaffected.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Back to the defaults for the loaded collection. Cancels a pending search.
    pub fn reset_filters(&mut self) {
        self.discard_pending_search();
        self.search_input.clear();
        self.spec = FilterSpec::for_products(&self.products);
    }

    /// Cancels pending deferred work. Called when the page is torn down.
    pub fn teardown(&mut self) {
        self.discard_pending_search();
    }

    /// Products passing the current filters, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<ProductModel> {
        filter::apply(&self.products, &self.spec)
    }

    /// True once loading finished and no product passes the filters.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.loading && !filter::any_match(&self.products, &self.spec)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Text currently in the search box, which may not be committed yet.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    #[must_use]
    pub fn products(&self) -> &[ProductModel] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryModel] {
        &self.categories
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Cancels the armed timer and drops values that fired but were never committed.
    fn discard_pending_search(&mut self) {
        self.search.cancel();
        while let Ok(stale) = self.search_rx.try_recv() {
            debug!("Discarding superseded search: {:?}", stale);
        }
    }

    /// Replaces the spec wholesale with one derived from the current spec.
    fn replace_spec(&mut self, update: impl FnOnce(FilterSpec) -> FilterSpec) {
        self.spec = update(std::mem::take(&mut self.spec));
    }
}
