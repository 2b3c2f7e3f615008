//! Domain types for the Chec Commerce API.
//!
//! These mirror the wire format the API returns, trimmed to the fields the
//! storefront renders. Every value here is server-authoritative: prices and
//! totals arrive pre-computed and pre-formatted, and the storefront never
//! recalculates them.

use serde::{Deserialize, Serialize};

use driftwood_core::{CartId, LineItemId, MerchantId, Price, ProductId};

// =============================================================================
// Merchant Types
// =============================================================================

/// Currency settings for a merchant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code.
    pub code: String,
    /// Currency symbol (e.g., "$").
    pub symbol: String,
}

/// The storefront owner's profile data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant ID.
    pub id: MerchantId,
    /// Business name shown in the hero.
    pub business_name: String,
    /// Short description of the business.
    #[serde(default)]
    pub business_description: String,
    /// Two-letter country code.
    #[serde(default)]
    pub country: String,
    /// Currency the store sells in.
    pub currency: Currency,
    /// Support contact email.
    #[serde(default)]
    pub support_email: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

// =============================================================================
// Product Types
// =============================================================================

/// Primary media asset for a product or line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Image URL.
    pub source: String,
}

/// A product in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// HTML description.
    #[serde(default)]
    pub description: String,
    /// URL slug.
    #[serde(default)]
    pub permalink: String,
    /// Server-formatted price.
    pub price: Price,
    /// Primary image, when the merchant uploaded one.
    #[serde(default)]
    pub media: Option<Media>,
    /// Whether the product is visible in the store.
    #[serde(default = "default_true")]
    pub active: bool,
}

const fn default_true() -> bool {
    true
}

/// Envelope for `GET /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    /// The products themselves.
    pub data: Vec<Product>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// One product-quantity pairing inside a cart.
///
/// The line item ID is minted by the API and is distinct from the product ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item ID.
    pub id: LineItemId,
    /// ID of the product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized by the API).
    #[serde(default)]
    pub name: String,
    /// Quantity of the product in this line.
    pub quantity: u32,
    /// Per-unit price.
    #[serde(default)]
    pub price: Price,
    /// Server-computed quantity x price.
    #[serde(default)]
    pub line_total: Price,
    /// Product image, when available.
    #[serde(default)]
    pub media: Option<Media>,
}

/// Server-authoritative cart state.
///
/// Returned in full by every cart read and mutation; the storefront replaces
/// its copy wholesale rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Cart ID.
    pub id: CartId,
    /// Total item count across all lines.
    pub total_items: u32,
    /// Number of distinct lines.
    #[serde(default)]
    pub total_unique_items: u32,
    /// Server-computed subtotal.
    #[serde(default)]
    pub subtotal: Price,
    /// Line items in the order the API returns them.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Cart {
    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Envelope returned by cart mutation endpoints.
///
/// The interesting payload is `cart`; the rest describes the event that
/// produced it.
#[derive(Debug, Clone, Deserialize)]
pub struct CartResponse {
    /// Whether the mutation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Event name (e.g., `Cart.Item.Added`).
    #[serde(default)]
    pub event: Option<String>,
    /// Line item affected by the mutation, when applicable.
    #[serde(default)]
    pub line_item_id: Option<LineItemId>,
    /// The new authoritative cart.
    pub cart: Cart,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_deserializes() {
        let json = r#"{
            "id": "merch_1",
            "business_name": "Driftwood Supply",
            "business_description": "Goods for the shoreline",
            "country": "US",
            "currency": { "code": "USD", "symbol": "$" },
            "support_email": "hello@driftwood.test"
        }"#;

        let merchant: Merchant = serde_json::from_str(json).unwrap();
        assert_eq!(merchant.business_name, "Driftwood Supply");
        assert_eq!(merchant.currency.symbol, "$");
        assert_eq!(merchant.support_email.as_deref(), Some("hello@driftwood.test"));
        assert!(merchant.logo.is_none());
    }

    #[test]
    fn test_product_list_envelope() {
        let json = r#"{
            "data": [{
                "id": "prod_abc",
                "name": "Canvas Tote",
                "description": "<p>Heavy canvas.</p>",
                "permalink": "canvas-tote",
                "price": {
                    "raw": 24.00,
                    "formatted": "24.00",
                    "formatted_with_symbol": "$24.00",
                    "formatted_with_code": "24.00 USD"
                },
                "media": { "source": "https://cdn.test/tote.png" }
            }]
        }"#;

        let list: ProductList = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        let product = list.data.first().unwrap();
        assert_eq!(product.name, "Canvas Tote");
        assert_eq!(product.price.display(), "$24.00");
        assert!(product.active, "active defaults to true when omitted");
    }

    #[test]
    fn test_cart_response_envelope() {
        let json = r#"{
            "success": true,
            "event": "Cart.Item.Added",
            "line_item_id": "item_1",
            "cart": {
                "id": "cart_xyz",
                "total_items": 1,
                "total_unique_items": 1,
                "subtotal": {
                    "raw": 24.00,
                    "formatted": "24.00",
                    "formatted_with_symbol": "$24.00",
                    "formatted_with_code": "24.00 USD"
                },
                "line_items": [{
                    "id": "item_1",
                    "product_id": "prod_abc",
                    "name": "Canvas Tote",
                    "quantity": 1,
                    "price": {
                        "raw": 24.00,
                        "formatted": "24.00",
                        "formatted_with_symbol": "$24.00",
                        "formatted_with_code": "24.00 USD"
                    },
                    "line_total": {
                        "raw": 24.00,
                        "formatted": "24.00",
                        "formatted_with_symbol": "$24.00",
                        "formatted_with_code": "24.00 USD"
                    }
                }]
            }
        }"#;

        let response: CartResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.event.as_deref(), Some("Cart.Item.Added"));
        assert_eq!(response.cart.total_items, 1);

        let line = response.cart.line_items.first().unwrap();
        assert_eq!(line.id.as_str(), "item_1");
        assert_eq!(line.product_id.as_str(), "prod_abc");
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_empty_cart() {
        let json = r#"{
            "id": "cart_xyz",
            "total_items": 0,
            "total_unique_items": 0,
            "line_items": []
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
    }
}
