//! Chec Commerce API client.
//!
//! # Architecture
//!
//! - REST + JSON via `reqwest` against the hosted Chec API
//! - Chec is source of truth - NO local commerce logic, direct API calls
//! - In-memory caching via `moka` for read-only responses (5 minute TTL);
//!   cart endpoints are never cached
//!
//! The seven operations the storefront depends on are expressed as the
//! [`CommerceApi`] trait so the controller can be exercised against a
//! scripted implementation in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use driftwood_storefront::chec::{ChecClient, CommerceApi};
//!
//! let client = ChecClient::new(&config.chec)?;
//!
//! let merchant = client.merchant_about().await?;
//! let products = client.list_products().await?;
//!
//! // Create a cart and add an item
//! let cart = client.create_cart().await?;
//! let cart = client.add_to_cart(&cart.id, &products[0].id, 1).await?;
//! ```

mod cache;
mod client;
pub mod types;

pub use client::ChecClient;
pub use types::*;

use driftwood_core::{CartId, LineItemId, ProductId};
use thiserror::Error;

/// Errors that can occur when interacting with the Chec API.
#[derive(Debug, Error)]
pub enum ChecError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// API key could not be used to build the client.
    #[error("Invalid API key: {0}")]
    InvalidKey(String),
}

/// The remote commerce operations the storefront depends on.
///
/// Every mutation returns the new authoritative [`Cart`]; callers replace
/// their local copy wholesale rather than merging.
#[allow(async_fn_in_trait)]
pub trait CommerceApi {
    /// Fetch the merchant profile.
    async fn merchant_about(&self) -> Result<Merchant, ChecError>;

    /// Fetch the product catalog.
    async fn list_products(&self) -> Result<Vec<Product>, ChecError>;

    /// Mint a new empty cart.
    async fn create_cart(&self) -> Result<Cart, ChecError>;

    /// Fetch an existing cart.
    async fn get_cart(&self, cart_id: &CartId) -> Result<Cart, ChecError>;

    /// Add a product to the cart.
    async fn add_to_cart(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart, ChecError>;

    /// Change the quantity of one line item.
    async fn update_cart_item(
        &self,
        cart_id: &CartId,
        line_item_id: &LineItemId,
        quantity: u32,
    ) -> Result<Cart, ChecError>;

    /// Remove one line item from the cart.
    async fn remove_cart_item(
        &self,
        cart_id: &CartId,
        line_item_id: &LineItemId,
    ) -> Result<Cart, ChecError>;

    /// Remove every line item from the cart.
    async fn empty_cart(&self, cart_id: &CartId) -> Result<Cart, ChecError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chec_error_display() {
        let err = ChecError::NotFound("carts/cart_123".to_string());
        assert_eq!(err.to_string(), "Not found: carts/cart_123");
    }

    #[test]
    fn test_api_error_display() {
        let err = ChecError::Api {
            status: 422,
            message: "Requested quantity not available".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error: 422 - Requested quantity not available"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = ChecError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }
}
