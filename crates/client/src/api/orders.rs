//! Order endpoints.

use serde_json::json;

use pawsome_core::{OrderId, OrderStatus};

use crate::models::Order;

use super::types::{CreateOrderRequest, OrderItemInput, PaymentIntent};
use super::{ApiClient, ApiError};

/// Typed bindings for `/orders/*`.
pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /orders/create-payment-intent` - start paying for the given
    /// cart lines.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if an item is out of stock or the call fails.
    pub async fn create_payment_intent(
        &self,
        items: &[OrderItemInput],
    ) -> Result<PaymentIntent, ApiError> {
        self.client
            .post("/orders/create-payment-intent", &json!({ "items": items }))
            .await
    }

    /// `POST /orders` - record a paid order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the payment intent is unknown or the call fails.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
        self.client.post("/orders", request).await
    }

    /// `GET /orders/my-orders` - the caller's order history.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not authenticated or the call
    /// fails.
    pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/orders/my-orders").await
    }

    /// `GET /orders` - every order (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/orders").await
    }

    /// `GET /orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the order does not exist or the call fails.
    pub async fn get(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.client.get(&format!("/orders/{id}")).await
    }

    /// `PUT /orders/{id}/status` - transition an order (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.client
            .put(&format!("/orders/{id}/status"), &json!({ "status": status }))
            .await
    }
}
