//! Auth service endpoints.

use pawsome_core::Preferences;

use crate::models::Identity;

use super::types::{Credentials, RegisterProfile};
use super::{ApiClient, ApiError};

/// Typed bindings for `/auth/*`.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register` - create an account, returning the signed-in
    /// identity (token included).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the profile (e.g. email
    /// already registered) or the call fails.
    pub async fn register(&self, profile: &RegisterProfile) -> Result<Identity, ApiError> {
        self.client.post("/auth/register", profile).await
    }

    /// `POST /auth/login` - exchange credentials for an identity.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on bad credentials or call failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        self.client.post("/auth/login", credentials).await
    }

    /// `GET /auth/me` - the identity behind the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the token is missing/expired or the call fails.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.client.get("/auth/me").await
    }

    /// `PUT /auth/preferences` - replace the lifestyle survey answers.
    ///
    /// The response body is an acknowledgement the session store ignores; it
    /// merges the submitted preferences locally instead.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not authenticated or the call
    /// fails.
    pub async fn update_preferences(&self, prefs: &Preferences) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.put("/auth/preferences", prefs).await?;
        Ok(())
    }
}
