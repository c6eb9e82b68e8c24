//! `cart`: the storefront cart from a terminal. Each invocation is one page
//! load against the persisted cart.

use anyhow::Context;
use cart_client::CartClient;
use cart_hex::application::cart_manager::{CartManager, OrderOutcome};
use cart_hex::application::render::format_price;
use cart_hex::application::search::SearchFilter;
use cart_hex::config::Config;
use cart_hex::errors::CartError;
use cart_hex::inbound::events::{dispatch_click, Element};
use cart_store::{build_store, Store};
use clap::{Parser, Subcommand};

mod catalog;
mod page;

use page::TerminalPage;

type Manager = CartManager<Store, CartClient, TerminalPage>;

#[derive(Parser)]
#[command(name = "cart", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart page
    Show,
    /// List products, optionally filtered by name or category
    Products {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add one unit of a catalog product
    Add { product_id: String },
    /// Remove a line from the cart
    Remove { id: String },
    /// Change a line's quantity by a signed delta
    Qty {
        id: String,
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Submit the order
    Checkout,
    /// Dispatch a click given as a JSON element path, clicked element first
    Click { path: String },
}

impl Commands {
    fn on_cart_page(&self) -> bool {
        !matches!(self, Commands::Products { .. } | Commands::Add { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / CART_* when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let catalog = catalog::load(config.catalog_path.as_deref())?;

    let store: Store = build_store(config.database_url.as_deref()).await?;
    let mut client = CartClient::builder(&config.api_base_url)?.with_order_path(&config.order_path);
    if let Some(timeout) = config.http_timeout() {
        client = client.with_timeout(timeout);
    }
    let client = client.build()?;

    let page = if cli.command.on_cart_page() {
        TerminalPage::cart_page()
    } else {
        TerminalPage::storefront()
    };
    let mut manager: Manager =
        CartManager::load(store, client, page, config.cart_settings()).await?;

    match cli.command {
        Commands::Show => {}
        Commands::Products { search } => {
            let filter = SearchFilter::new(search.as_deref().unwrap_or_default());
            let currency = &manager.settings().currency_symbol;
            for card in filter.visible(&catalog) {
                println!(
                    "  [{}] {:<28} {:<10} {}",
                    card.id,
                    card.name,
                    card.category,
                    format_price(currency, card.price)
                );
            }
        }
        Commands::Add { product_id } => {
            let card = catalog::find(&catalog, &product_id)
                .with_context(|| format!("unknown product {product_id}"))?;
            manager
                .add_item(&card.id, &card.name, card.price, &card.image)
                .await?;
        }
        Commands::Remove { id } => manager.remove_item(&id).await?,
        Commands::Qty { id, delta } => manager.update_quantity(&id, delta).await?,
        Commands::Checkout => {
            let result = manager.place_order().await;
            report_order(result)?;
        }
        Commands::Click { path } => {
            let path: Vec<Element> =
                serde_json::from_str(&path).context("click path must be a JSON array of elements")?;
            match dispatch_click(&path) {
                Some(action) => match manager.handle(action).await {
                    Ok(Some(outcome)) => report_order(Ok(outcome))?,
                    Ok(None) => {}
                    Err(e) => report_order(Err(e))?,
                },
                None => tracing::info!("click did not hit a cart control"),
            }
        }
    }

    manager.page().print();
    Ok(())
}

/// Transport failures are reported, not fatal: the cart is intact for a retry.
fn report_order(result: Result<OrderOutcome, CartError>) -> anyhow::Result<()> {
    match result {
        Ok(OrderOutcome::Skipped) => println!("Nothing to order."),
        Ok(_) => {}
        Err(CartError::Transport(e)) => {
            println!("Could not reach the store ({e}). Your cart is unchanged, try again.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
