//! Pawsome client library.
//!
//! Client-side state for the Pawsome adoption storefront: the session and
//! cart stores, their durable local persistence, the identity-change signal
//! that reconciles them, and typed bindings for the REST backend.
//!
//! # Architecture
//!
//! - [`state::AppState`] composes everything once at application start and
//!   wires the cart store's subscription to the identity signal. Consumers
//!   receive store handles from it; there are no ambient singletons.
//! - [`store::session::SessionStore`] owns the authenticated identity and is
//!   the sole source of truth for "who is logged in".
//! - [`store::cart::CartStore`] owns the line-item list; it works with or
//!   without an identity (guest carts).
//! - [`api::ApiClient`] is a thin typed layer over the REST backend; all
//!   business rules (scoring, payments, status transitions) live server-side.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
