use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use fresh_basket::{
    config::{self, catalog, storefront::StorefrontSettings},
    core::{
        catalog::seed_catalog,
        filter::{PriceRange, SortKey},
        notify::{self, NotificationReceiver},
        product::TableFetcher,
    },
    errors::Result,
    storefront::{DetailPage, LandingPage, Layout, ListingPage, Navbar, render},
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fresh Basket storefront in the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the catalog tables and load products from a seed file
    Seed {
        #[arg(long, default_value = fresh_basket::config::catalog::DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
    },
    /// Show the landing page
    Home,
    /// Show the product listing
    Products {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        /// name-asc, name-desc, price-asc or price-desc
        #[arg(long, default_value = "name-asc")]
        sort: String,
        #[arg(long, value_enum, default_value_t = LayoutArg::Grid)]
        layout: LayoutArg,
    },
    /// Show one product
    Product { id: String },
    /// Show the navigation bar with the mobile menu open
    Nav,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayoutArg {
    Grid,
    List,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Grid => Self::Grid,
            LayoutArg::List => Self::List,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    let args = Args::parse();
    let settings = StorefrontSettings::from_env();

    // 3. Connect to the catalog tables
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to the catalog database: {}", e))?;
    config::database::create_tables(&db).await?;
    let fetcher = TableFetcher::new(db);

    let (notifier, mut notifications) = notify::channel();

    match args.command {
        Command::Seed { catalog: path } => {
            let seed = catalog::load_catalog(&path)?;
            let summary = seed_catalog(fetcher.connection(), &seed).await?;
            info!("Seeded catalog from {}", path.display());
            println!(
                "Created {} categories and {} products ({} already present).",
                summary.categories_created, summary.products_created, summary.skipped
            );
        }
        Command::Home => {
            let mut page = LandingPage::new(settings.featured_limit, notifier);
            page.load(&fetcher).await;
            print_page(&render::render_landing(&page, settings.grid_columns));
        }
        Command::Products {
            search,
            category,
            min,
            max,
            sort,
            layout,
        } => {
            let mut page = ListingPage::new(&settings, notifier);
            page.load(&fetcher).await;

            let derived = page.spec().price_range;
            if min.is_some() || max.is_some() {
                page.set_price_range(PriceRange::new(
                    min.unwrap_or(derived.min),
                    max.unwrap_or(derived.max),
                ));
            }
            page.set_category(category);
            page.set_sort(SortKey::from(sort.as_str()));
            page.set_layout(layout.into());
            if !search.trim().is_empty() {
                page.set_search(search);
                page.next_search().await;
            }

            print_page(&render::render_listing(&page, settings.grid_columns));
        }
        Command::Product { id } => {
            let mut page = DetailPage::new(id, notifier);
            page.load(&fetcher).await;
            print_page(&render::render_detail(&page));
        }
        Command::Nav => {
            let mut navbar = Navbar::new();
            navbar.toggle_menu();
            println!("{}", render::render_navbar(&navbar));
        }
    }

    print_notifications(&mut notifications);
    Ok(())
}

fn print_page(body: &str) {
    println!("{}\n\n{body}", render::render_navbar(&Navbar::new()));
}

fn print_notifications(rx: &mut NotificationReceiver) {
    for notification in notify::drain(rx) {
        eprintln!("{notification}");
    }
}
