//! Cache value types for the Chec API client.

use super::types::{Merchant, Product};

/// Values stored in the client's response cache.
///
/// Only read-only catalog data is cached; carts are mutable state and always
/// hit the API.
#[derive(Clone)]
pub enum CacheValue {
    /// Merchant profile (boxed - large struct).
    Merchant(Box<Merchant>),
    /// Full product listing.
    Products(Vec<Product>),
}
