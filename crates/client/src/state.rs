//! Application state shared across consumers.
//!
//! Constructed once at application start; the stores live for the process
//! and are handed to consumers by reference. The cart store's subscription
//! to the identity signal is wired here, so neither store knows the other.

use std::sync::Arc;

use tracing::warn;

use crate::api::ApiClient;
use crate::config::PawsomeConfig;
use crate::error::Result;
use crate::storage::Storage;
use crate::store::StoreError;
use crate::store::cart::CartStore;
use crate::store::session::SessionStore;
use crate::store::signal::IdentitySignal;

/// Application state shared across all consumers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PawsomeConfig,
    api: ApiClient,
    signal: IdentitySignal,
    session: SessionStore,
    cart: CartStore,
}

impl AppState {
    /// Create the application state and wire the store subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created or the
    /// HTTP client cannot be constructed.
    pub fn new(config: PawsomeConfig) -> Result<Self> {
        let storage = Storage::open(&config.state_dir).map_err(StoreError::from)?;
        let signal = IdentitySignal::default();
        let api = ApiClient::new(&config, storage.clone())?;

        let cart = CartStore::new(storage.clone());
        let session = SessionStore::new(api.clone(), storage, signal.clone());

        // The one place the stores are coupled: a sign-in by a different
        // user or any sign-out empties the cart
        let subscriber = cart.clone();
        signal.subscribe(move |event| {
            if let Err(e) = subscriber.handle_identity_event(event) {
                warn!(error = %e, "failed to apply identity change to cart");
            }
        });

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                signal,
                session,
                cart,
            }),
        })
    }

    /// Create the application state from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing/invalid or construction
    /// fails.
    pub fn from_env() -> Result<Self> {
        let config = PawsomeConfig::from_env()?;
        Self::new(config)
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &PawsomeConfig {
        &self.inner.config
    }

    /// Get a reference to the REST API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the identity-change signal.
    #[must_use]
    pub fn signal(&self) -> &IdentitySignal {
        &self.inner.signal
    }
}
