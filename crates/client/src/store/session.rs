//! The session store.
//!
//! Sole source of truth for "who is logged in". Login and registration
//! delegate to the auth collaborator; on success the new identity is
//! persisted *first* and the identity-change signal broadcast second, so
//! subscribers inspecting durable state always observe the new identity.

use std::sync::{Arc, Mutex, PoisonError};

use pawsome_core::Preferences;

use crate::api::{ApiClient, Credentials, RegisterProfile};
use crate::error::Result;
use crate::models::Identity;
use crate::storage::{Storage, keys};

use super::StoreError;
use super::signal::{IdentityEvent, IdentitySignal};

/// The session store.
///
/// Cheaply cloneable; all clones share one identity slot.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: ApiClient,
    storage: Storage,
    signal: IdentitySignal,
    current: Mutex<Option<Identity>>,
}

impl SessionStore {
    /// Create a session store, loading any previously persisted identity.
    ///
    /// A corrupt or missing `identity` entry yields a signed-out session.
    #[must_use]
    pub fn new(api: ApiClient, storage: Storage, signal: IdentitySignal) -> Self {
        let current = storage.read::<Identity>(keys::IDENTITY);

        Self {
            inner: Arc::new(SessionInner {
                api,
                storage,
                signal,
                current: Mutex::new(current),
            }),
        }
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.lock().clone()
    }

    /// Whether an identity is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// Whether the signed-in identity may use back-office operations.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.lock().as_ref().is_some_and(Identity::is_admin)
    }

    /// Sign in with email and password.
    ///
    /// On success the identity is persisted and the identity-change signal
    /// broadcast with `clear_cart` set when a *different* user than the
    /// previously persisted one signed in (prevents cart sharing between
    /// users on one machine).
    ///
    /// # Errors
    ///
    /// Returns the API error as-is on failure; the store is left unchanged
    /// and no signal fires.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        let user = self.inner.api.auth().login(credentials).await?;
        Ok(self.apply_sign_in(user)?)
    }

    /// Create an account and sign in. Same signal contract as
    /// [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Returns the API error as-is on failure; the store is left unchanged
    /// and no signal fires.
    pub async fn register(&self, profile: &RegisterProfile) -> Result<Identity> {
        let user = self.inner.api.auth().register(profile).await?;
        Ok(self.apply_sign_in(user)?)
    }

    /// Sign out: clear the persisted identity and broadcast the
    /// unconditional signed-out signal (always implies cart clear).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the persisted identity cannot be
    /// removed.
    pub fn logout(&self) -> std::result::Result<(), StoreError> {
        {
            let mut current = self.lock();
            *current = None;
            self.inner.storage.remove(keys::IDENTITY)?;
        }
        self.inner.signal.broadcast(&IdentityEvent::SignedOut);
        Ok(())
    }

    /// Replace the lifestyle survey on the backend, then merge it into the
    /// current identity and persist. Broadcasts nothing - preference changes
    /// have no cart impact.
    ///
    /// # Errors
    ///
    /// Returns the API error as-is on failure (store unchanged), or
    /// `StoreError::NotAuthenticated` if nobody is signed in.
    pub async fn update_preferences(&self, prefs: Preferences) -> Result<Identity> {
        self.inner.api.auth().update_preferences(&prefs).await?;
        Ok(self.apply_preferences(prefs)?)
    }

    /// Fetch the identity behind the current bearer token from the backend.
    ///
    /// Read-only passthrough; does not touch the persisted identity.
    ///
    /// # Errors
    ///
    /// Returns the API error as-is on failure.
    pub async fn fetch_self(&self) -> Result<Identity> {
        Ok(self.inner.api.auth().me().await?)
    }

    /// Record a successful sign-in: compare against the previously persisted
    /// identity, persist the new one, then broadcast.
    ///
    /// A malformed previous identity record is treated as "no previous
    /// identity", so it never forces a cart clear.
    fn apply_sign_in(&self, user: Identity) -> std::result::Result<Identity, StoreError> {
        let previous_id = self
            .inner
            .storage
            .read::<Identity>(keys::IDENTITY)
            .map(|previous| previous.id);

        let clear_cart = previous_id.is_some_and(|previous| previous != user.id);

        {
            // Persist before broadcast: subscribers reading durable state
            // must see the new identity
            let mut current = self.lock();
            self.inner.storage.write(keys::IDENTITY, &user)?;
            *current = Some(user.clone());
        }

        self.inner.signal.broadcast(&IdentityEvent::SignedIn {
            user_id: user.id.clone(),
            clear_cart,
        });

        Ok(user)
    }

    /// Merge new preferences into the current identity and persist.
    fn apply_preferences(
        &self,
        prefs: Preferences,
    ) -> std::result::Result<Identity, StoreError> {
        let mut current = self.lock();
        let identity = current.as_mut().ok_or(StoreError::NotAuthenticated)?;

        identity.preferences = Some(prefs);
        self.inner.storage.write(keys::IDENTITY, identity)?;

        Ok(identity.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Identity>> {
        self.inner
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use tempfile::TempDir;

    use pawsome_core::{
        ActivityLevel, Email, ExperienceLevel, HomeType, Personality, UserId, UserRole,
    };

    use crate::config::PawsomeConfig;
    use crate::models::Product;
    use crate::store::cart::CartStore;

    struct Harness {
        _dir: TempDir,
        storage: Storage,
        session: SessionStore,
        cart: CartStore,
    }

    /// Build the full composed wiring: storage, signal, session, cart
    /// subscribed the way `AppState` subscribes it.
    fn harness() -> Harness {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let signal = IdentitySignal::default();

        let config = PawsomeConfig {
            api_url: url::Url::parse("http://localhost:5000/api").unwrap(),
            state_dir: dir.path().to_path_buf(),
            request_timeout: Duration::from_secs(5),
        };
        let api = ApiClient::new(&config, storage.clone()).unwrap();

        let cart = CartStore::new(storage.clone());
        let session = SessionStore::new(api, storage.clone(), signal.clone());

        let subscriber = cart.clone();
        signal.subscribe(move |event| {
            let _ = subscriber.handle_identity_event(event);
        });

        Harness {
            _dir: dir,
            storage,
            session,
            cart,
        }
    }

    fn identity(id: &str) -> Identity {
        Identity {
            id: UserId::new(id),
            name: format!("user-{id}"),
            email: Email::parse(&format!("{id}@example.com")).unwrap(),
            role: UserRole::User,
            token: format!("token-{id}"),
            preferences: None,
        }
    }

    fn sample_product() -> Product {
        Product {
            id: pawsome_core::ProductId::new("p1"),
            name: "Feather Wand".to_string(),
            description: String::new(),
            price: rust_decimal::Decimal::new(10, 0),
            category: "toys".to_string(),
            stock: 10,
            image: None,
            is_active: true,
        }
    }

    #[test]
    fn test_first_sign_in_keeps_guest_cart() {
        let h = harness();
        h.cart.add_item(&sample_product(), 2).unwrap();

        h.session.apply_sign_in(identity("u1")).unwrap();

        assert_eq!(h.cart.count(), 2);
        assert!(h.session.is_authenticated());
        assert_eq!(
            h.storage.read::<Identity>(keys::IDENTITY).unwrap().id,
            UserId::new("u1")
        );
    }

    #[test]
    fn test_same_user_sign_in_preserves_cart() {
        let h = harness();
        h.session.apply_sign_in(identity("u2")).unwrap();
        h.cart.add_item(&sample_product(), 3).unwrap();

        h.session.apply_sign_in(identity("u2")).unwrap();

        assert_eq!(h.cart.count(), 3);
    }

    #[test]
    fn test_different_user_sign_in_clears_cart() {
        let h = harness();
        h.session.apply_sign_in(identity("u1")).unwrap();
        h.cart.add_item(&sample_product(), 2).unwrap();

        h.session.apply_sign_in(identity("u2")).unwrap();

        assert!(h.cart.is_empty());
        assert_eq!(
            h.session.current().map(|identity| identity.id),
            Some(UserId::new("u2"))
        );
    }

    #[test]
    fn test_logout_always_clears_cart() {
        let h = harness();
        h.session.apply_sign_in(identity("u1")).unwrap();
        h.cart.add_item(&sample_product(), 2).unwrap();

        h.session.logout().unwrap();

        assert!(h.cart.is_empty());
        assert!(!h.session.is_authenticated());
        assert_eq!(h.storage.read::<Identity>(keys::IDENTITY), None);
    }

    #[test]
    fn test_malformed_previous_identity_means_no_clear() {
        let h = harness();
        h.cart.add_item(&sample_product(), 2).unwrap();

        // Damaged record: valid JSON but missing the id field
        h.storage
            .write(keys::IDENTITY, &serde_json::json!({ "name": "ghost" }))
            .unwrap();

        h.session.apply_sign_in(identity("u9")).unwrap();

        // Treated as "no previous identity"
        assert_eq!(h.cart.count(), 2);
    }

    #[test]
    fn test_persist_happens_before_broadcast() {
        let h = harness();
        let observed = Arc::new(AtomicBool::new(false));

        let storage = h.storage.clone();
        let seen = Arc::clone(&observed);
        // Subscribe an observer that inspects durable state mid-broadcast
        let signal = IdentitySignal::default();
        let session = SessionStore::new(
            ApiClient::new(
                &PawsomeConfig {
                    api_url: url::Url::parse("http://localhost:5000/api").unwrap(),
                    state_dir: h._dir.path().to_path_buf(),
                    request_timeout: Duration::from_secs(5),
                },
                storage.clone(),
            )
            .unwrap(),
            storage.clone(),
            signal.clone(),
        );
        signal.subscribe(move |_| {
            let persisted = storage.read::<Identity>(keys::IDENTITY);
            seen.store(
                persisted.is_some_and(|identity| identity.id == UserId::new("u7")),
                Ordering::SeqCst,
            );
        });

        session.apply_sign_in(identity("u7")).unwrap();
        assert!(observed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_apply_preferences_merges_and_persists() {
        let h = harness();
        h.session.apply_sign_in(identity("u1")).unwrap();

        let prefs = Preferences {
            home_type: HomeType::Apartment,
            activity_level: ActivityLevel::Low,
            has_kids: false,
            experience_level: ExperienceLevel::Beginner,
            preferred_personality: Personality::Calm,
        };
        let updated = h.session.apply_preferences(prefs.clone()).unwrap();

        assert_eq!(updated.preferences, Some(prefs.clone()));
        // Token survives the merge
        assert_eq!(updated.token, "token-u1");
        assert_eq!(
            h.storage
                .read::<Identity>(keys::IDENTITY)
                .unwrap()
                .preferences,
            Some(prefs)
        );
    }

    #[test]
    fn test_apply_preferences_requires_sign_in() {
        let h = harness();

        let prefs = Preferences {
            home_type: HomeType::House,
            activity_level: ActivityLevel::High,
            has_kids: true,
            experience_level: ExperienceLevel::Experienced,
            preferred_personality: Personality::Social,
        };

        assert!(matches!(
            h.session.apply_preferences(prefs),
            Err(StoreError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_store_reloads_persisted_identity() {
        let h = harness();
        h.session.apply_sign_in(identity("u1")).unwrap();

        let config = PawsomeConfig {
            api_url: url::Url::parse("http://localhost:5000/api").unwrap(),
            state_dir: h._dir.path().to_path_buf(),
            request_timeout: Duration::from_secs(5),
        };
        let api = ApiClient::new(&config, h.storage.clone()).unwrap();
        let reloaded =
            SessionStore::new(api, h.storage.clone(), IdentitySignal::default());

        assert_eq!(
            reloaded.current().map(|identity| identity.id),
            Some(UserId::new("u1"))
        );
    }
}
