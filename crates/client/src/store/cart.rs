//! The cart store.
//!
//! An ordered list of line items persisted after every mutation. Works with
//! or without an identity; the only identity coupling is the signal
//! subscription wired by the composing layer.

use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pawsome_core::ProductId;

use crate::models::Product;
use crate::storage::{Storage, keys};

use super::StoreError;
use super::signal::IdentityEvent;

/// One product-and-quantity pair in the cart.
///
/// Carries the product fields the cart and checkout need so the list renders
/// without refetching the catalog. `stock` is the ceiling reported by the
/// backend at add time; the UI layer enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
    /// Always >= 1; driving it to zero removes the item.
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            stock: product.stock,
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The cart store.
///
/// Cheaply cloneable; all clones share one line-item list. Mutations are
/// synchronous and persist before returning.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartInner>,
}

struct CartInner {
    storage: Storage,
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    /// Create a cart store, loading any previously persisted line items.
    ///
    /// A corrupt or missing `cart` entry yields an empty cart.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let items = storage.read::<Vec<CartItem>>(keys::CART).unwrap_or_default();

        Self {
            inner: Arc::new(CartInner {
                storage,
                items: Mutex::new(items),
            }),
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new line item is appended. Adding zero units
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the cart cannot be persisted.
    pub fn add_item(&self, product: &Product, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return Ok(());
        }

        let mut items = self.lock();
        match items.iter_mut().find(|item| item.product_id == product.id) {
            Some(existing) => existing.quantity += quantity,
            None => items.push(CartItem::from_product(product, quantity)),
        }
        self.persist(&items)
    }

    /// Delete the line item for `product_id`, if present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the cart cannot be persisted.
    pub fn remove_item(&self, product_id: &ProductId) -> Result<(), StoreError> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| &item.product_id != product_id);
        if items.len() == before {
            return Ok(());
        }
        self.persist(&items)
    }

    /// Overwrite the quantity for `product_id`.
    ///
    /// A quantity of zero is equivalent to [`remove_item`](Self::remove_item).
    /// Unknown product ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the cart cannot be persisted.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        let mut items = self.lock();
        let Some(item) = items.iter_mut().find(|item| &item.product_id == product_id) else {
            return Ok(());
        };
        item.quantity = quantity;
        self.persist(&items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the cart cannot be persisted.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut items = self.lock();
        items.clear();
        self.persist(&items)
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().clone()
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lock().iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all line items.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lock().iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// React to an identity change: a sign-in by a different user or any
    /// sign-out empties the cart and removes its persisted state.
    ///
    /// Wired to the identity signal by the composing layer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the persisted entry cannot be
    /// removed.
    pub fn handle_identity_event(&self, event: &IdentityEvent) -> Result<(), StoreError> {
        match event {
            IdentityEvent::SignedIn { clear_cart: true, .. } | IdentityEvent::SignedOut => {
                let mut items = self.lock();
                items.clear();
                self.inner.storage.remove(keys::CART)?;
                debug!("cart cleared on identity change");
                Ok(())
            }
            IdentityEvent::SignedIn { .. } => Ok(()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CartItem>> {
        self.inner
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &[CartItem]) -> Result<(), StoreError> {
        self.inner.storage.write(keys::CART, &items)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use pawsome_core::UserId;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            price: Decimal::new(price, 0),
            category: "toys".to_string(),
            stock: 10,
            image: None,
            is_active: true,
        }
    }

    fn cart(dir: &TempDir) -> CartStore {
        CartStore::new(Storage::open(dir.path()).unwrap())
    }

    #[test]
    fn test_add_merges_by_product_id() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        let wand = product("A", 10);

        store.add_item(&wand, 2).unwrap();
        store.add_item(&wand, 3).unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
        assert_eq!(store.total(), Decimal::new(50, 0));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);

        store.add_item(&product("A", 10), 0).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        let wand = product("A", 10);
        let mouse = product("B", 5);

        store.add_item(&wand, 2).unwrap();
        store.add_item(&mouse, 1).unwrap();
        store.set_quantity(&wand.id, 0).unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, mouse.id);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        let wand = product("A", 10);

        store.add_item(&wand, 2).unwrap();
        store.set_quantity(&wand.id, 7).unwrap();

        assert_eq!(store.count(), 7);
        assert_eq!(store.total(), Decimal::new(70, 0));
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);

        store.add_item(&product("A", 10), 1).unwrap();
        store.set_quantity(&ProductId::new("missing"), 4).unwrap();

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);

        store.add_item(&product("A", 10), 1).unwrap();
        store.remove_item(&ProductId::new("missing")).unwrap();

        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_totals_after_mutation_sequence() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        let wand = product("A", 10);
        let mouse = product("B", 5);

        store.add_item(&wand, 2).unwrap();
        store.add_item(&mouse, 4).unwrap();
        store.set_quantity(&mouse.id, 1).unwrap();
        store.remove_item(&wand.id).unwrap();
        store.add_item(&wand, 3).unwrap();

        // wand x3 @ 10 + mouse x1 @ 5
        assert_eq!(store.total(), Decimal::new(35, 0));
        assert_eq!(store.count(), 4);
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);

        store.add_item(&product("A", 10), 2).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);

        // Reloading sees the cleared state
        assert!(cart(&dir).is_empty());
    }

    #[test]
    fn test_cart_survives_reload() {
        let dir = TempDir::new().unwrap();
        {
            let store = cart(&dir);
            store.add_item(&product("A", 10), 2).unwrap();
        }

        let reloaded = cart(&dir);
        assert_eq!(reloaded.count(), 2);
        assert_eq!(reloaded.total(), Decimal::new(20, 0));
    }

    #[test]
    fn test_corrupt_cart_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cart.json"), "[{broken").unwrap();

        assert!(cart(&dir).is_empty());
    }

    #[test]
    fn test_signed_out_clears_cart_and_removes_state() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        store.add_item(&product("A", 10), 2).unwrap();

        store.handle_identity_event(&IdentityEvent::SignedOut).unwrap();

        assert!(store.is_empty());
        assert!(!dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_sign_in_with_clear_flag_clears_cart() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        store.add_item(&product("A", 10), 2).unwrap();

        store
            .handle_identity_event(&IdentityEvent::SignedIn {
                user_id: UserId::new("u2"),
                clear_cart: true,
            })
            .unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_sign_in_without_clear_flag_preserves_cart() {
        let dir = TempDir::new().unwrap();
        let store = cart(&dir);
        store.add_item(&product("A", 10), 2).unwrap();

        store
            .handle_identity_event(&IdentityEvent::SignedIn {
                user_id: UserId::new("u1"),
                clear_cart: false,
            })
            .unwrap();

        assert_eq!(store.count(), 2);
    }
}
