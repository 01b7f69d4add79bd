//! Pawsome CLI - the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! paws cats list --energy low --good-with-kids
//! paws products list --category toys
//!
//! # Shop
//! paws cart add <product-id> -q 2
//! paws checkout --full-name "Jordan Lee" --address "1 Cat Lane" \
//!     --city Penang --state PG --zip 10000 --country MY
//!
//! # Adopt
//! paws adopt <cat-id> --full-name "Jordan Lee" --address "1 Cat Lane" \
//!     --city Penang --state PG --zip 10000 --country MY
//!
//! # Account
//! paws account login -e jordan@example.com -p secret
//! paws account survey --home-type apartment --activity-level low \
//!     --experience-level beginner --personality calm
//! ```
//!
//! # Environment Variables
//!
//! - `PAWSOME_API_URL` - Base URL of the REST backend (required)
//! - `PAWSOME_STATE_DIR` - Directory for the persisted identity and cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use pawsome_client::state::AppState;

mod commands;

use commands::{account, admin, cart, catalog, checkout, orders};

#[derive(Parser)]
#[command(name = "paws")]
#[command(author, version, about = "Pawsome adoption storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the signed-in account
    Account {
        #[command(subcommand)]
        action: account::AccountAction,
    },
    /// Browse adoptable cats
    Cats {
        #[command(subcommand)]
        action: catalog::CatsAction,
    },
    /// Browse shop products
    Products {
        #[command(subcommand)]
        action: catalog::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: cart::CartAction,
    },
    /// Pay for the cart and place an order
    Checkout(checkout::CheckoutArgs),
    /// Pay the adoption fee for a cat
    Adopt(checkout::AdoptArgs),
    /// View order history
    Orders {
        #[command(subcommand)]
        action: orders::OrdersAction,
    },
    /// View adoption requests
    Adoptions {
        #[command(subcommand)]
        action: orders::AdoptionsAction,
    },
    /// Cats matched to the lifestyle survey
    Recommendations,
    /// Back-office operations (admin role required)
    Admin {
        #[command(subcommand)]
        action: admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_env()?;

    match cli.command {
        Commands::Account { action } => account::run(&state, action).await?,
        Commands::Cats { action } => catalog::run_cats(&state, action).await?,
        Commands::Products { action } => catalog::run_products(&state, action).await?,
        Commands::Cart { action } => cart::run(&state, action).await?,
        Commands::Checkout(args) => checkout::run_checkout(&state, args).await?,
        Commands::Adopt(args) => checkout::run_adopt(&state, args).await?,
        Commands::Orders { action } => orders::run_orders(&state, action).await?,
        Commands::Adoptions { action } => orders::run_adoptions(&state, action).await?,
        Commands::Recommendations => orders::run_recommendations(&state).await?,
        Commands::Admin { action } => admin::run(&state, action).await?,
    }
    Ok(())
}
