//! Cart commands.

use clap::Subcommand;

use pawsome_core::ProductId;
use pawsome_client::state::AppState;

/// Errors specific to cart commands.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// Adding would exceed the stock the backend reported.
    #[error("only {stock} of {name} in stock ({in_cart} already in cart)")]
    StockExceeded {
        name: String,
        stock: u32,
        in_cart: u32,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart contents
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Overwrite a product's quantity (0 removes it)
    SetQty {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

pub async fn run(state: &AppState, action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CartAction::Show => {
            let items = state.cart().items();
            if items.is_empty() {
                println!("Cart is empty");
                return Ok(());
            }
            for item in &items {
                println!(
                    "{}  {} x{} @ RM{:.2} = RM{:.2}",
                    item.product_id,
                    item.name,
                    item.quantity,
                    item.price,
                    item.line_total()
                );
            }
            println!("---");
            println!(
                "{} items, total RM{:.2}",
                state.cart().count(),
                state.cart().total()
            );
        }
        CartAction::Add { id, quantity } => {
            let product = state.api().products().get(&ProductId::new(id)).await?;

            // The store itself doesn't cap quantities; enforcing the stock
            // ceiling is this layer's job
            let in_cart = state
                .cart()
                .items()
                .iter()
                .find(|item| item.product_id == product.id)
                .map_or(0, |item| item.quantity);
            if in_cart + quantity > product.stock {
                return Err(CartError::StockExceeded {
                    name: product.name,
                    stock: product.stock,
                    in_cart,
                }
                .into());
            }

            state.cart().add_item(&product, quantity)?;
            println!(
                "Added {} x{}; cart now has {} items",
                product.name,
                quantity,
                state.cart().count()
            );
        }
        CartAction::Remove { id } => {
            state.cart().remove_item(&ProductId::new(id))?;
            println!("Removed; cart now has {} items", state.cart().count());
        }
        CartAction::SetQty { id, quantity } => {
            state.cart().set_quantity(&ProductId::new(id), quantity)?;
            println!("Cart now has {} items", state.cart().count());
        }
        CartAction::Clear => {
            state.cart().clear()?;
            println!("Cart cleared");
        }
    }
    Ok(())
}
