//! Text rendering of storefront pages for a terminal.
//!
//! Rendering only reads page state. Layout choices (grid or list, column count) are
//! made here; the pages know nothing about them beyond the chosen [`Layout`].

use super::{
    DetailPage, DetailState, LandingPage, Layout, ListingPage, Navbar, Route,
    landing::{FEATURES, HERO_SUBTITLE, HERO_TITLE},
    navbar::BRAND,
};
use crate::entities::ProductModel;
use std::fmt::Write as _;

/// Image shown when a product has no photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const CARD_WIDTH: usize = 28;

/// `"$4.99 per kg"`
#[must_use]
pub fn format_price(product: &ProductModel) -> String {
    format!("${:.2} per {}", product.price, product.unit)
}

/// `"Stock: 12 kgs available"`
#[must_use]
pub fn format_stock(product: &ProductModel) -> String {
    format!(
        "Stock: {} {}s available",
        product.stock_quantity, product.unit
    )
}

/// Photo location, or the placeholder.
#[must_use]
pub fn image_for(product: &ProductModel) -> &str {
    product.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
}

/// Compact summary shown without navigating to the detail page.
#[must_use]
pub fn quick_view(product: &ProductModel) -> String {
    let mut out = format!("{}\n{}\n", product.name, format_price(product));
    if let Some(description) = product.description.as_deref() {
        let _ = writeln!(out, "{description}");
    }
    let _ = writeln!(out, "In stock: {}", product.stock_quantity);
    let _ = write!(out, "Details: {}", Route::Product(product.id.clone()));
    out
}

#[must_use]
pub fn render_navbar(navbar: &Navbar) -> String {
    let links: Vec<&str> = Navbar::menu_items().iter().map(|item| item.name).collect();
    let mut out = format!(
        "{BRAND}   {}   [Cart {}]",
        links.join(" | "),
        Navbar::cart_route()
    );
    if navbar.is_menu_open() {
        for item in Navbar::menu_items() {
            let _ = write!(out, "\n  {} ({})", item.name, item.route);
        }
    }
    out
}

#[must_use]
pub fn render_landing(page: &LandingPage, columns: usize) -> String {
    let mut out = format!("{HERO_TITLE}\n{HERO_SUBTITLE}\n[Shop Now -> {}]\n\n", Route::Products);

    for feature in &FEATURES {
        let _ = writeln!(out, "* {}: {}", feature.title, feature.description);
    }

    out.push_str("\nFeatured Products\n");
    if page.is_loading() {
        out.push_str("Loading featured products...");
    } else if page.featured().is_empty() {
        out.push_str("No featured products right now.");
    } else {
        out.push_str(&render_grid(page.featured(), columns));
    }
    out
}

#[must_use]
pub fn render_listing(page: &ListingPage, columns: usize) -> String {
    let mut out = String::from("Our Products\n");

    if page.is_loading() {
        out.push_str("Loading products...");
        return out;
    }

    let visible = page.visible();
    let spec = page.spec();
    let _ = write!(
        out,
        "Showing {} of {} products (sort: {}, price: ${:.2} - ${:.2}",
        visible.len(),
        page.products().len(),
        spec.sort_key,
        spec.price_range.min,
        spec.price_range.max
    );
    if !spec.search_query.trim().is_empty() {
        let _ = write!(out, ", search: {:?}", spec.search_query.trim());
    }
    if let Some(category_id) = spec.category_id.as_deref() {
        let name = page
            .categories()
            .iter()
            .find(|category| category.id == category_id)
            .map_or(category_id, |category| category.name.as_str());
        let _ = write!(out, ", category: {name}");
    }
    out.push_str(")\n\n");

    if visible.is_empty() {
        out.push_str("No products match your filters.");
        return out;
    }

    match page.layout() {
        Layout::Grid => out.push_str(&render_grid(&visible, columns)),
        Layout::List => out.push_str(&render_list(&visible)),
    }
    out
}

#[must_use]
pub fn render_detail(page: &DetailPage) -> String {
    match page.state() {
        DetailState::Loading => "Loading product details...".to_string(),
        DetailState::NotFound => {
            format!("Product Not Found\nBack to Products ({})", Route::Products)
        }
        DetailState::Loaded(product) => {
            let mut out = format!("<- Back to Products ({})\n\n", Route::Products);
            let _ = writeln!(out, "{}", product.name);
            if let Some(description) = product.description.as_deref() {
                let _ = writeln!(out, "{description}");
            }
            let _ = writeln!(out, "{}", format_price(product));
            let _ = writeln!(out, "{}", format_stock(product));
            let _ = writeln!(out, "Image: {}", image_for(product));
            out.push_str("[ Add to Cart ]");
            out
        }
    }
}

/// Cards laid out `columns` per row.
#[must_use]
pub fn render_grid(products: &[ProductModel], columns: usize) -> String {
    let rows: Vec<String> = products
        .chunks(columns.max(1))
        .map(|row| {
            let cards: Vec<[String; 3]> = row.iter().map(card_lines).collect();
            (0..3)
                .map(|line| {
                    cards
                        .iter()
                        .map(|card| format!("{:<CARD_WIDTH$}", card[line]))
                        .collect::<Vec<_>>()
                        .join("  ")
                        .trim_end()
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    rows.join("\n\n")
}

/// One product per line.
#[must_use]
pub fn render_list(products: &[ProductModel]) -> String {
    products
        .iter()
        .map(|product| {
            format!(
                "{} · {} · {}",
                product.name,
                format_price(product),
                Route::Product(product.id.clone())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn card_lines(product: &ProductModel) -> [String; 3] {
    [
        truncate(&product.name, CARD_WIDTH),
        truncate(&format_price(product), CARD_WIDTH),
        truncate(product.description.as_deref().unwrap_or_default(), CARD_WIDTH),
    ]
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
