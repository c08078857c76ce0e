//! Lumina CLI - Scripted walkthroughs of the marketplace engine.
//!
//! # Usage
//!
//! ```bash
//! # Print the seeded catalog
//! lumina catalog
//!
//! # Print the seeded user records
//! lumina users
//!
//! # Run the scripted buyer checkout flow
//! lumina demo
//! lumina demo --email sarah@lumina.com
//! ```
//!
//! # Commands
//!
//! - `catalog` - List the demo catalog
//! - `users` - List the demo user records
//! - `demo` - Sign in, fill a cart, and run the simulated checkout

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lumina_core::ProductId;
use lumina_marketplace::{CancellationToken, Marketplace, MarketplaceConfig};

#[derive(Parser)]
#[command(name = "lumina")]
#[command(author, version, about = "Lumina marketplace demo driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo catalog
    Catalog,
    /// List the demo user records
    Users,
    /// Sign in, fill a cart, and run the simulated checkout
    Demo {
        /// Email to sign in with
        #[arg(short, long, default_value = "alex@lumina.com")]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MarketplaceConfig::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => catalog(&config),
        Commands::Users => users(&config),
        Commands::Demo { email } => demo(config, &email).await?,
    }

    Ok(())
}

fn catalog(config: &MarketplaceConfig) {
    let app = Marketplace::with_demo_data(config.clone());
    for product in app.store().products() {
        println!(
            "{:>4}  {:<28} {:>9}  stock {:>3}  seller {}",
            product.id, product.name, product.price, product.stock, product.seller_id
        );
    }
}

fn users(config: &MarketplaceConfig) {
    let app = Marketplace::with_demo_data(config.clone());
    for user in app.store().users() {
        println!("{:<4} {:<14} {:<20} {}", user.id, user.name, user.email, user.role);
    }
}

async fn demo(config: MarketplaceConfig, email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Marketplace::with_demo_data(config);

    let user = app.login(email).map_err(|e| e.user_message())?;
    tracing::info!(user = %user.id, "demo flow starting");
    println!("Signed in as {} ({})", user.name, user.role);
    println!("Landing view: {}", app.current_view());
    print!("Menu:");
    for item in app.nav_items() {
        print!("  {}", item.label);
    }
    println!();

    // Fill the cart with a couple of seeded products.
    app.add_to_cart(&ProductId::new("1"))?;
    app.add_to_cart(&ProductId::new("3"))?;
    app.add_to_cart(&ProductId::new("3"))?;

    let totals = app.totals();
    println!(
        "Cart: {} items, subtotal {}, tax {}, total {}",
        app.cart_count(),
        totals.subtotal,
        totals.tax,
        totals.total
    );

    println!("Placing order...");
    let receipt = app.place_order(&CancellationToken::new()).await?;
    println!(
        "Order placed: {} seller(s) notified, charged {}",
        receipt.sellers_notified, receipt.totals.total
    );

    println!("Notifications for {}:", user.name);
    for n in app.notifications() {
        println!("  [{}] {}", n.timestamp.format("%H:%M:%S"), n.message);
    }

    Ok(())
}
