//! Client-side state stores.
//!
//! Two stores with durable local persistence, reconciled through an explicit
//! identity-change signal:
//!
//! - [`session::SessionStore`] - the authenticated identity
//! - [`cart::CartStore`] - the shopping cart line items
//!
//! The signal is owned by the composing layer ([`crate::state::AppState`])
//! and handed to the session store at construction; there is no ambient
//! event bus.

pub mod cart;
pub mod session;
pub mod signal;

pub use cart::{CartItem, CartStore};
pub use session::SessionStore;
pub use signal::{IdentityEvent, IdentitySignal};

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur in the local stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Durable state could not be written or removed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The operation requires a signed-in identity.
    #[error("not authenticated")]
    NotAuthenticated,
}
