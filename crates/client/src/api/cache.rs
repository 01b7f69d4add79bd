//! Cache types for catalog API responses.

use crate::models::{Cat, Product};

/// Cache key for catalog listings.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Cats,
    Products { category: Option<String> },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Cats(Vec<Cat>),
    Products(Vec<Product>),
}
