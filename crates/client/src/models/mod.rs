//! Domain types returned by the REST backend.
//!
//! Wire format is the backend's camelCase JSON with Mongo-style `_id`
//! identifiers; money fields are JSON numbers mapped to `Decimal`.

pub mod catalog;
pub mod order;
pub mod user;

pub use catalog::{Cat, CatTraits, Product};
pub use order::{Adoption, Order, OrderItem, Recommendation, ShippingAddress};
pub use user::Identity;
