//! Recommendation endpoints.

use crate::models::Recommendation;

use super::{ApiClient, ApiError};

/// Typed bindings for `/recommendations`.
pub struct RecommendationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RecommendationsApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /recommendations` - cats scored against the caller's lifestyle
    /// survey. Scoring lives entirely server-side.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not authenticated, has no survey
    /// on file, or the call fails.
    pub async fn list(&self) -> Result<Vec<Recommendation>, ApiError> {
        self.client.get("/recommendations").await
    }
}
