//! REST API client for the Pawsome backend.
//!
//! # Architecture
//!
//! - The backend is the source of truth - no local sync, direct API calls
//! - Bearer tokens are read from the persisted identity on every request,
//!   so a login in one handle is immediately visible to all others
//! - Catalog reads are cached in-memory via `moka` (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use pawsome_client::api::ApiClient;
//!
//! let api = ApiClient::new(&config, storage)?;
//!
//! // Browse the catalog
//! let cats = api.cats().list().await?;
//!
//! // Check out the cart
//! let intent = api.orders().create_payment_intent(&items).await?;
//! ```

pub(crate) mod cache;
mod types;

pub mod adoptions;
pub mod auth;
pub mod cats;
pub mod orders;
pub mod products;
pub mod recommendations;

pub use adoptions::AdoptionsApi;
pub use auth::AuthApi;
pub use cats::CatsApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use recommendations::RecommendationsApi;
pub use types::{
    CatInput, CreateOrderRequest, Credentials, OrderItemInput, PaymentIntent, ProductInput,
    ProductQuery, PurchaseAdoptionRequest, RegisterProfile,
};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::PawsomeConfig;
use crate::models::Identity;
use crate::storage::{Storage, keys};

use cache::{CacheKey, CacheValue};

const CATALOG_CACHE_CAPACITY: u64 = 1000;
const CATALOG_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (transport-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend rejected the request.
    #[error("{message} (HTTP {status})")]
    Status {
        status: StatusCode,
        /// Message from the backend's `{ "message": ... }` error envelope.
        message: String,
    },

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// A request body attachment could not be read from disk.
    #[error("attachment error: {0}")]
    Attachment(#[from] std::io::Error),
}

/// Error envelope returned by the backend on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the Pawsome REST backend.
///
/// Cheaply cloneable; all clones share one connection pool and one catalog
/// cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    storage: Storage,
    catalog_cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &PawsomeConfig, storage: Storage) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let catalog_cache = Cache::builder()
            .max_capacity(CATALOG_CACHE_CAPACITY)
            .time_to_live(CATALOG_CACHE_TTL)
            // Product listings are invalidated by predicate on mutation
            .support_invalidation_closures()
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                storage,
                catalog_cache,
            }),
        })
    }

    // =========================================================================
    // Sub-clients (one per backend service)
    // =========================================================================

    /// Auth service endpoints.
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Cat catalog endpoints.
    #[must_use]
    pub const fn cats(&self) -> CatsApi<'_> {
        CatsApi::new(self)
    }

    /// Product catalog endpoints.
    #[must_use]
    pub const fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Adoption endpoints.
    #[must_use]
    pub const fn adoptions(&self) -> AdoptionsApi<'_> {
        AdoptionsApi::new(self)
    }

    /// Order endpoints.
    #[must_use]
    pub const fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Recommendation endpoints.
    #[must_use]
    pub const fn recommendations(&self) -> RecommendationsApi<'_> {
        RecommendationsApi::new(self)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Bearer token from the persisted identity, if any.
    ///
    /// Read per request rather than cached so that login/logout in the
    /// session store takes effect immediately (persist happens before any
    /// subsequent call).
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .storage
            .read::<Identity>(keys::IDENTITY)
            .map(|identity| identity.token)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.inner.http.request(method, self.endpoint(path));
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        execute(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        execute(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        execute(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path);
        check(builder.send().await?).await?;
        Ok(())
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        execute(self.request(method, path).multipart(form)).await
    }

    // =========================================================================
    // Catalog cache
    // =========================================================================

    pub(crate) async fn cache_get(&self, key: &CacheKey) -> Option<CacheValue> {
        self.inner.catalog_cache.get(key).await
    }

    pub(crate) async fn cache_insert(&self, key: CacheKey, value: CacheValue) {
        self.inner.catalog_cache.insert(key, value).await;
    }

    pub(crate) async fn invalidate_cats(&self) {
        self.inner.catalog_cache.invalidate(&CacheKey::Cats).await;
    }

    pub(crate) async fn invalidate_products(&self) {
        // Product listings are keyed per category filter; drop them all
        self.inner
            .catalog_cache
            .invalidate_entries_if(|key, _| matches!(key, CacheKey::Products { .. }))
            .ok();
    }
}

/// Send the request and decode a JSON response body.
async fn execute<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let text = check(builder.send().await?).await?;

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            Err(ApiError::Parse(e))
        }
    }
}

/// Check the response status, returning the body text on success.
async fn check(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1);
        return Err(ApiError::RateLimited(retry_after));
    }

    let text = response.text().await?;

    if !status.is_success() {
        // Backend errors arrive as { "message": ... }; fall back to the
        // raw body for anything else (proxies, crashes)
        let message = serde_json::from_str::<ErrorBody>(&text).map_or_else(
            |_| text.chars().take(200).collect::<String>(),
            |body| body.message,
        );
        return Err(ApiError::Status { status, message });
    }

    Ok(text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn test_client(dir: &TempDir) -> ApiClient {
        let config = PawsomeConfig {
            api_url: url::Url::parse("http://localhost:5000/api").unwrap(),
            state_dir: dir.path().to_path_buf(),
            request_timeout: Duration::from_secs(5),
        };
        let storage = Storage::open(dir.path()).unwrap();
        ApiClient::new(&config, storage).unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let dir = TempDir::new().unwrap();
        let client = test_client(&dir);
        assert_eq!(
            client.endpoint("/cats"),
            "http://localhost:5000/api/cats"
        );
    }

    #[test]
    fn test_bearer_token_absent_without_identity() {
        let dir = TempDir::new().unwrap();
        let client = test_client(&dir);
        assert_eq!(client.bearer_token(), None);
    }

    #[test]
    fn test_bearer_token_reads_persisted_identity() {
        let dir = TempDir::new().unwrap();
        let client = test_client(&dir);

        let storage = Storage::open(dir.path()).unwrap();
        storage
            .write(
                keys::IDENTITY,
                &serde_json::json!({
                    "_id": "u1",
                    "name": "Jordan",
                    "email": "jordan@example.com",
                    "token": "jwt-abc"
                }),
            )
            .unwrap();

        assert_eq!(client.bearer_token(), Some("jwt-abc".to_string()));
    }

    #[test]
    fn test_error_body_envelope_is_preferred() {
        let message = serde_json::from_str::<ErrorBody>(r#"{"message":"Invalid credentials"}"#)
            .unwrap()
            .message;
        assert_eq!(message, "Invalid credentials");
    }
}
