//! Order, adoption, and recommendation types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawsome_core::{AdoptionId, AdoptionStatus, OrderId, OrderStatus, ProductId};

use super::catalog::Cat;

/// Shipping details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// One purchased line of an order, as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

/// A product order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An adoption request with its populated cat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adoption {
    #[serde(rename = "_id")]
    pub id: AdoptionId,
    /// The backend populates the cat reference on reads.
    #[serde(rename = "catId")]
    pub cat: Cat,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub adoption_fee: Option<Decimal>,
    #[serde(default)]
    pub status: AdoptionStatus,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A server-scored cat recommendation.
///
/// Scoring happens entirely server-side against the identity's lifestyle
/// preferences; the client only displays the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub cat: Cat,
    /// Match percentage, 0-100.
    pub compatibility_score: u8,
}
