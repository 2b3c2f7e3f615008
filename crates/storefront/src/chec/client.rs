//! Chec Commerce API client implementation.
//!
//! REST + JSON over `reqwest` 0.13. Merchant and product responses are
//! cached with `moka` (5-minute TTL); cart endpoints always hit the API.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};

use driftwood_core::{CartId, LineItemId, ProductId};

use crate::config::ChecConfig;

use super::cache::CacheValue;
use super::types::{Cart, CartResponse, Merchant, Product, ProductList};
use super::{ChecError, CommerceApi};

/// Cache key for the merchant profile.
const MERCHANT_CACHE_KEY: &str = "merchant";

/// Cache key for the product listing.
const PRODUCTS_CACHE_KEY: &str = "products";

/// Client for the Chec Commerce API.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ChecClient {
    inner: Arc<ChecClientInner>,
}

struct ChecClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl ChecClient {
    /// Create a new Chec API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be encoded as a header value
    /// or the HTTP client fails to build.
    pub fn new(config: &ChecConfig) -> Result<Self, ChecError> {
        let mut headers = HeaderMap::new();

        // Chec authenticates with the public key in a custom header
        headers.insert(
            "X-Authorization",
            HeaderValue::from_str(config.public_key.expose_secret())
                .map_err(|e| ChecError::InvalidKey(e.to_string()))?,
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            inner: Arc::new(ChecClientInner {
                client,
                base_url: config.api_url.clone(),
                cache,
            }),
        })
    }

    /// Build a full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Send a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, ChecError> {
        let response = request.send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ChecError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ChecError::NotFound(path.to_string()));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                path = %path,
                body = %response_text.chars().take(500).collect::<String>(),
                "Chec API returned non-success status"
            );
            return Err(ChecError::Api {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %path,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Chec API response"
                );
                Err(ChecError::Parse(e))
            }
        }
    }

    /// GET a path and decode the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ChecError> {
        let request = self.inner.client.get(self.url(path));
        self.execute(request, path).await
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

impl CommerceApi for ChecClient {
    /// Fetch the merchant profile (cached).
    #[instrument(skip(self))]
    async fn merchant_about(&self) -> Result<Merchant, ChecError> {
        if let Some(CacheValue::Merchant(merchant)) =
            self.inner.cache.get(MERCHANT_CACHE_KEY).await
        {
            debug!("Cache hit for merchant");
            return Ok(*merchant);
        }

        let merchant: Merchant = self.get_json("merchants/about").await?;

        self.inner
            .cache
            .insert(
                MERCHANT_CACHE_KEY.to_string(),
                CacheValue::Merchant(Box::new(merchant.clone())),
            )
            .await;

        Ok(merchant)
    }

    /// Fetch the product catalog (cached).
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ChecError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(PRODUCTS_CACHE_KEY).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let list: ProductList = self.get_json("products").await?;
        let products = list.data;

        self.inner
            .cache
            .insert(
                PRODUCTS_CACHE_KEY.to_string(),
                CacheValue::Products(products.clone()),
            )
            .await;

        Ok(products)
    }

    /// Mint a new empty cart.
    ///
    /// Chec creates a cart on a bare `GET /carts`.
    #[instrument(skip(self))]
    async fn create_cart(&self) -> Result<Cart, ChecError> {
        self.get_json("carts").await
    }

    /// Fetch an existing cart.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    async fn get_cart(&self, cart_id: &CartId) -> Result<Cart, ChecError> {
        self.get_json(&format!("carts/{cart_id}")).await
    }

    /// Add a product to the cart.
    #[instrument(skip(self), fields(cart_id = %cart_id, product_id = %product_id))]
    async fn add_to_cart(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart, ChecError> {
        let path = format!("carts/{cart_id}");
        let request = self
            .inner
            .client
            .post(self.url(&path))
            .json(&json!({ "id": product_id, "quantity": quantity }));

        let response: CartResponse = self.execute(request, &path).await?;
        Ok(response.cart)
    }

    /// Change the quantity of one line item.
    #[instrument(skip(self), fields(cart_id = %cart_id, line_item_id = %line_item_id))]
    async fn update_cart_item(
        &self,
        cart_id: &CartId,
        line_item_id: &LineItemId,
        quantity: u32,
    ) -> Result<Cart, ChecError> {
        let path = format!("carts/{cart_id}/items/{line_item_id}");
        let request = self
            .inner
            .client
            .put(self.url(&path))
            .json(&json!({ "quantity": quantity }));

        let response: CartResponse = self.execute(request, &path).await?;
        Ok(response.cart)
    }

    /// Remove one line item from the cart.
    #[instrument(skip(self), fields(cart_id = %cart_id, line_item_id = %line_item_id))]
    async fn remove_cart_item(
        &self,
        cart_id: &CartId,
        line_item_id: &LineItemId,
    ) -> Result<Cart, ChecError> {
        let path = format!("carts/{cart_id}/items/{line_item_id}");
        let request = self.inner.client.delete(self.url(&path));

        let response: CartResponse = self.execute(request, &path).await?;
        Ok(response.cart)
    }

    /// Remove every line item from the cart.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    async fn empty_cart(&self, cart_id: &CartId) -> Result<Cart, ChecError> {
        let path = format!("carts/{cart_id}/items");
        let request = self.inner.client.delete(self.url(&path));

        let response: CartResponse = self.execute(request, &path).await?;
        Ok(response.cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_client() -> ChecClient {
        ChecClient::new(&ChecConfig {
            api_url: "https://api.chec.io/v1".to_string(),
            public_key: SecretString::from("pk_18313570a4a2e1a0b0a75cf1"),
        })
        .unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = test_client();
        assert_eq!(
            client.url("merchants/about"),
            "https://api.chec.io/v1/merchants/about"
        );
        assert_eq!(
            client.url("carts/cart_1/items/item_2"),
            "https://api.chec.io/v1/carts/cart_1/items/item_2"
        );
    }

    #[test]
    fn test_rejects_unencodable_key() {
        let result = ChecClient::new(&ChecConfig {
            api_url: "https://api.chec.io/v1".to_string(),
            public_key: SecretString::from("pk_bad\nkey"),
        });
        assert!(result.is_err());
    }
}
