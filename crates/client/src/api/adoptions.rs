//! Adoption endpoints.

use serde_json::json;

use pawsome_core::{AdoptionId, AdoptionStatus, CatId};

use crate::models::Adoption;

use super::types::{PaymentIntent, PurchaseAdoptionRequest};
use super::{ApiClient, ApiError};

/// Typed bindings for `/adoptions/*`.
pub struct AdoptionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdoptionsApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /adoptions/create-payment-intent` - start paying the adoption
    /// fee for a cat.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the cat is unavailable or the call fails.
    pub async fn create_payment_intent(&self, cat_id: &CatId) -> Result<PaymentIntent, ApiError> {
        self.client
            .post("/adoptions/create-payment-intent", &json!({ "catId": cat_id }))
            .await
    }

    /// `POST /adoptions/purchase` - record a paid adoption.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the payment intent is unknown or the call fails.
    pub async fn purchase(&self, request: &PurchaseAdoptionRequest) -> Result<Adoption, ApiError> {
        self.client.post("/adoptions/purchase", request).await
    }

    /// `GET /adoptions/my-requests` - the caller's adoption requests.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not authenticated or the call
    /// fails.
    pub async fn my_requests(&self) -> Result<Vec<Adoption>, ApiError> {
        self.client.get("/adoptions/my-requests").await
    }

    /// `GET /adoptions` - every adoption request (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn list_all(&self) -> Result<Vec<Adoption>, ApiError> {
        self.client.get("/adoptions").await
    }

    /// `PUT /adoptions/{id}/status` - transition a request (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn update_status(
        &self,
        id: &AdoptionId,
        status: AdoptionStatus,
    ) -> Result<Adoption, ApiError> {
        self.client
            .put(&format!("/adoptions/{id}/status"), &json!({ "status": status }))
            .await
    }
}
