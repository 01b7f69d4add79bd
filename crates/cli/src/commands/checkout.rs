//! Checkout commands: paying for the cart and adopting a cat.
//!
//! Both flows create a payment intent on the backend, hand the client secret
//! to the payment processor's own checkout (outside this CLI), and submit
//! the confirmed intent id. The intent id is the prefix of the client
//! secret, so no processor SDK is needed here.

use clap::Args;

use pawsome_core::CatId;
use pawsome_client::api::{CreateOrderRequest, OrderItemInput, PurchaseAdoptionRequest};
use pawsome_client::models::ShippingAddress;
use pawsome_client::state::AppState;

/// Errors specific to checkout commands.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing in the cart to pay for.
    #[error("cart is empty")]
    EmptyCart,
}

#[derive(Args, Clone)]
pub struct ShippingArgs {
    /// Recipient full name
    #[arg(long)]
    pub full_name: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// State or region
    #[arg(long)]
    pub state: String,

    /// Postal code
    #[arg(long = "zip")]
    pub zip_code: String,

    /// Country
    #[arg(long)]
    pub country: String,
}

impl From<ShippingArgs> for ShippingAddress {
    fn from(args: ShippingArgs) -> Self {
        Self {
            full_name: args.full_name,
            address: args.address,
            city: args.city,
            state: args.state,
            zip_code: args.zip_code,
            country: args.country,
        }
    }
}

#[derive(Args)]
pub struct CheckoutArgs {
    #[command(flatten)]
    pub shipping: ShippingArgs,
}

#[derive(Args)]
pub struct AdoptArgs {
    /// Cat ID to adopt
    pub cat_id: String,

    #[command(flatten)]
    pub shipping: ShippingArgs,
}

pub async fn run_checkout(
    state: &AppState,
    args: CheckoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<OrderItemInput> = state
        .cart()
        .items()
        .iter()
        .map(|item| OrderItemInput {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
        })
        .collect();
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart.into());
    }

    let total = state.cart().total();
    let intent = state.api().orders().create_payment_intent(&items).await?;
    let payment_intent_id = intent_id(&intent.client_secret).to_string();

    let order = state
        .api()
        .orders()
        .create(&CreateOrderRequest {
            items,
            payment_intent_id,
            shipping_address: args.shipping.into(),
        })
        .await?;

    // Order is placed; the cart's job is done
    state.cart().clear()?;

    println!(
        "Order {} placed: RM{:.2}, status {}",
        order.id, total, order.status
    );
    Ok(())
}

pub async fn run_adopt(
    state: &AppState,
    args: AdoptArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let cat_id = CatId::new(args.cat_id);
    let intent = state
        .api()
        .adoptions()
        .create_payment_intent(&cat_id)
        .await?;
    let payment_intent_id = intent_id(&intent.client_secret).to_string();

    let adoption = state
        .api()
        .adoptions()
        .purchase(&PurchaseAdoptionRequest {
            cat_id,
            payment_intent_id,
            shipping_address: args.shipping.into(),
        })
        .await?;

    println!(
        "Adoption of {} recorded, status {}",
        adoption.cat.name, adoption.status
    );
    Ok(())
}

/// The intent id is everything before the `_secret` suffix of the client
/// secret (`pi_123_secret_456` -> `pi_123`).
fn intent_id(client_secret: &str) -> &str {
    client_secret
        .split_once("_secret")
        .map_or(client_secret, |(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_id_strips_secret_suffix() {
        assert_eq!(intent_id("pi_123_secret_456"), "pi_123");
    }

    #[test]
    fn test_intent_id_passes_through_unrecognized_secrets() {
        assert_eq!(intent_id("opaque-token"), "opaque-token");
    }
}
