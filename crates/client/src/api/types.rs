//! Request payloads for the backend endpoints.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawsome_core::{CatId, ProductId};

use crate::models::ShippingAddress;

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration profile.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payment intent created by the backend against the payment processor.
///
/// Confirmation happens through the processor's own SDK, outside this
/// client; only the resulting intent id comes back through us.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// One cart line submitted for checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `POST /orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
    pub payment_intent_id: String,
    pub shipping_address: ShippingAddress,
}

/// Body for `POST /adoptions/purchase`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAdoptionRequest {
    pub cat_id: CatId,
    pub payment_intent_id: String,
    pub shipping_address: ShippingAddress,
}

/// Filters accepted by `GET /products`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Fields for creating or updating a cat (multipart; image optional).
#[derive(Debug, Clone)]
pub struct CatInput {
    pub name: String,
    pub breed: String,
    pub age: u8,
    pub gender: String,
    pub description: String,
    pub adoption_fee: Decimal,
    pub energy_level: String,
    pub maintenance_level: String,
    pub personality: String,
    pub good_with_kids: bool,
    /// Local path of an image to upload, if any.
    pub image: Option<PathBuf>,
}

/// Fields for creating or updating a product (multipart; image optional).
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    pub is_active: bool,
    /// Local path of an image to upload, if any.
    pub image: Option<PathBuf>,
}
