//! The identity-change signal.
//!
//! A synchronous, process-scoped subscriber list. The session store
//! broadcasts after persisting, so subscribers inspecting durable state
//! always observe the new identity.

use std::sync::{Arc, Mutex, PoisonError};

use pawsome_core::UserId;

/// Notification fired when login/registration/logout alters the stored
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEvent {
    /// A login or registration completed.
    SignedIn {
        user_id: UserId,
        /// True when a *different* identity than the previously persisted
        /// one signed in - subscribers holding per-user state should drop it.
        clear_cart: bool,
    },
    /// The identity was cleared. Always implies dropping per-user state.
    SignedOut,
}

type Subscriber = Box<dyn Fn(&IdentityEvent) + Send + Sync>;

/// Process-scoped broadcast handle for [`IdentityEvent`]s.
///
/// Constructed once by the composing layer and handed to both sides:
/// the session store broadcasts, the cart store subscribes. Delivery is
/// synchronous and in subscription order.
#[derive(Clone, Default)]
pub struct IdentitySignal {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl IdentitySignal {
    /// Register a subscriber for all future broadcasts.
    ///
    /// Subscribers must not call [`subscribe`](Self::subscribe) from inside
    /// their callback.
    pub fn subscribe(&self, subscriber: impl Fn(&IdentityEvent) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    /// Deliver `event` to every current subscriber, synchronously.
    pub fn broadcast(&self, event: &IdentityEvent) {
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(event);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_broadcast_reaches_all_subscribers() {
        let signal = IdentitySignal::default();
        let hits = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            signal.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.broadcast(&IdentityEvent::SignedOut);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_broadcast_without_subscribers_is_noop() {
        let signal = IdentitySignal::default();
        signal.broadcast(&IdentityEvent::SignedIn {
            user_id: UserId::new("u1"),
            clear_cart: true,
        });
    }

    #[test]
    fn test_delivery_is_synchronous() {
        let signal = IdentitySignal::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        signal.subscribe(move |event| {
            sink.lock().unwrap().push(event.clone());
        });

        signal.broadcast(&IdentityEvent::SignedOut);
        // Observable before broadcast returns control to the caller
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
