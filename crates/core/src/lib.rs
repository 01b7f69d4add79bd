//! Pawsome Core - Shared types library.
//!
//! This crate provides common types used across all Pawsome components:
//! - `client` - Client-side stores and REST API bindings
//! - `cli` - Command-line storefront frontend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, statuses, and
//!   lifestyle preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
