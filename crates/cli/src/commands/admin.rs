//! Back-office commands (admin role required by the backend).
//!
//! # Usage
//!
//! ```bash
//! # Transition an order
//! paws admin orders set-status <id> shipped
//!
//! # Add a cat to the catalog
//! paws admin cats add --name Miso --breed "Maine Coon" --age 3 \
//!     --gender female --description "Gentle giant" --fee 120 \
//!     --energy low --maintenance high --personality calm --good-with-kids
//! ```

use std::path::PathBuf;

use clap::Subcommand;
use rust_decimal::Decimal;

use pawsome_core::{AdoptionId, AdoptionStatus, CatId, OrderId, OrderStatus, ProductId};
use pawsome_client::api::{CatInput, ProductInput};
use pawsome_client::state::AppState;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: AdminOrdersAction,
    },
    /// Manage adoption requests
    Adoptions {
        #[command(subcommand)]
        action: AdminAdoptionsAction,
    },
    /// Manage the cat catalog
    Cats {
        #[command(subcommand)]
        action: AdminCatsAction,
    },
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        action: AdminProductsAction,
    },
}

#[derive(Subcommand)]
pub enum AdminOrdersAction {
    /// List every order
    List,
    /// Transition an order's status
    SetStatus {
        /// Order ID
        id: String,

        /// pending, processing, shipped, delivered, or cancelled
        status: OrderStatus,
    },
}

#[derive(Subcommand)]
pub enum AdminAdoptionsAction {
    /// List every adoption request
    List,
    /// Transition an adoption request's status
    SetStatus {
        /// Adoption ID
        id: String,

        /// pending, paid, processing, completed, or cancelled
        status: AdoptionStatus,
    },
}

#[derive(Subcommand)]
pub enum AdminCatsAction {
    /// Add a cat to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: u8,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        description: String,
        /// Adoption fee
        #[arg(long)]
        fee: Decimal,
        /// Energy level trait
        #[arg(long)]
        energy: String,
        /// Maintenance level trait
        #[arg(long)]
        maintenance: String,
        /// Personality trait
        #[arg(long)]
        personality: String,
        #[arg(long)]
        good_with_kids: bool,
        /// Image file to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Remove a cat from the catalog
    Remove {
        /// Cat ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AdminProductsAction {
    /// Add a product to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        category: String,
        #[arg(long)]
        stock: u32,
        /// Hide the product from the storefront
        #[arg(long)]
        inactive: bool,
        /// Image file to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Remove a product from the catalog
    Remove {
        /// Product ID
        id: String,
    },
}

pub async fn run(state: &AppState, action: AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdminAction::Orders { action } => match action {
            AdminOrdersAction::List => {
                for order in state.api().orders().list_all().await? {
                    println!(
                        "{}  RM{:.2} status={} placed {}",
                        order.id,
                        order.total_amount,
                        order.status,
                        order.created_at.format("%Y-%m-%d")
                    );
                }
            }
            AdminOrdersAction::SetStatus { id, status } => {
                let order = state
                    .api()
                    .orders()
                    .update_status(&OrderId::new(id), status)
                    .await?;
                println!("Order {} is now {}", order.id, order.status);
            }
        },
        AdminAction::Adoptions { action } => match action {
            AdminAdoptionsAction::List => {
                for request in state.api().adoptions().list_all().await? {
                    println!(
                        "{}  {} status={} on {}",
                        request.id,
                        request.cat.name,
                        request.status,
                        request.created_at.format("%Y-%m-%d")
                    );
                }
            }
            AdminAdoptionsAction::SetStatus { id, status } => {
                let request = state
                    .api()
                    .adoptions()
                    .update_status(&AdoptionId::new(id), status)
                    .await?;
                println!("Adoption {} is now {}", request.id, request.status);
            }
        },
        AdminAction::Cats { action } => match action {
            AdminCatsAction::Add {
                name,
                breed,
                age,
                gender,
                description,
                fee,
                energy,
                maintenance,
                personality,
                good_with_kids,
                image,
            } => {
                let cat = state
                    .api()
                    .cats()
                    .create(CatInput {
                        name,
                        breed,
                        age,
                        gender,
                        description,
                        adoption_fee: fee,
                        energy_level: energy,
                        maintenance_level: maintenance,
                        personality,
                        good_with_kids,
                        image,
                    })
                    .await?;
                println!("Added cat {} ({})", cat.name, cat.id);
            }
            AdminCatsAction::Remove { id } => {
                state.api().cats().delete(&CatId::new(id)).await?;
                println!("Cat removed");
            }
        },
        AdminAction::Products { action } => match action {
            AdminProductsAction::Add {
                name,
                description,
                price,
                category,
                stock,
                inactive,
                image,
            } => {
                let product = state
                    .api()
                    .products()
                    .create(ProductInput {
                        name,
                        description,
                        price,
                        category,
                        stock,
                        is_active: !inactive,
                        image,
                    })
                    .await?;
                println!("Added product {} ({})", product.name, product.id);
            }
            AdminProductsAction::Remove { id } => {
                state.api().products().delete(&ProductId::new(id)).await?;
                println!("Product removed");
            }
        },
    }
    Ok(())
}
