//! Home page route handler.
//!
//! Renders whatever state the controller currently holds: placeholders
//! until the startup fetches land, real content afterwards.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::chec::{Merchant, Product};
use crate::filters;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Merchant display data for the hero section.
#[derive(Clone)]
pub struct MerchantView {
    pub name: String,
    pub description: String,
    pub support_email: Option<String>,
    pub logo: Option<String>,
}

impl MerchantView {
    /// Placeholder shown until the merchant fetch lands.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            support_email: None,
            logo: None,
        }
    }
}

/// Product display data for the grid.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Merchant> for MerchantView {
    fn from(merchant: &Merchant) -> Self {
        Self {
            name: merchant.business_name.clone(),
            description: merchant.business_description.clone(),
            support_email: merchant.support_email.clone(),
            logo: merchant.logo.clone(),
        }
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display().to_string(),
            image: product.media.as_ref().map(|media| ImageView {
                url: media.source.clone(),
            }),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Merchant data for the hero.
    pub merchant: MerchantView,
    /// Products for the grid.
    pub products: Vec<ProductView>,
    /// Cart data for the drawer and nav badge.
    pub cart: CartView,
    /// Whether the cart drawer is open.
    pub cart_visible: bool,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let controller = state.controller().lock().await;

    HomeTemplate {
        merchant: controller
            .merchant()
            .map_or_else(MerchantView::placeholder, MerchantView::from),
        products: controller
            .products()
            .iter()
            .filter(|product| product.active)
            .map(ProductView::from)
            .collect(),
        cart: controller.cart().map_or_else(CartView::empty, CartView::from),
        cart_visible: controller.cart_visible(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn merchant_fixture() -> Merchant {
        serde_json::from_value(serde_json::json!({
            "id": "merch_1",
            "business_name": "Driftwood Supply",
            "business_description": "Goods for the shoreline",
            "currency": { "code": "USD", "symbol": "$" },
            "support_email": "hello@driftwood.test"
        }))
        .unwrap()
    }

    fn product_fixture() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "prod_abc",
            "name": "Canvas Tote",
            "description": "<p>Heavy canvas.</p>",
            "price": {
                "raw": 24.00,
                "formatted": "24.00",
                "formatted_with_symbol": "$24.00",
                "formatted_with_code": "24.00 USD"
            },
            "media": { "source": "https://cdn.test/tote.png" }
        }))
        .unwrap()
    }

    #[test]
    fn test_merchant_view_conversion() {
        let view = MerchantView::from(&merchant_fixture());
        assert_eq!(view.name, "Driftwood Supply");
        assert_eq!(view.support_email.as_deref(), Some("hello@driftwood.test"));
        assert!(view.logo.is_none());
    }

    #[test]
    fn test_product_view_conversion() {
        let view = ProductView::from(&product_fixture());
        assert_eq!(view.id, "prod_abc");
        assert_eq!(view.price, "$24.00");
        assert_eq!(view.image.as_ref().unwrap().url, "https://cdn.test/tote.png");
    }

    #[test]
    fn test_home_template_renders_with_empty_state() {
        // Views tolerate entirely empty state before start() completes
        let template = HomeTemplate {
            merchant: MerchantView::placeholder(),
            products: Vec::new(),
            cart: CartView::empty(),
            cart_visible: false,
        };

        let html = template.render().unwrap();
        assert!(html.contains("cart-toggle"));
    }

    #[test]
    fn test_home_template_renders_products() {
        let template = HomeTemplate {
            merchant: MerchantView::from(&merchant_fixture()),
            products: vec![ProductView::from(&product_fixture())],
            cart: CartView::empty(),
            cart_visible: true,
        };

        let html = template.render().unwrap();
        assert!(html.contains("Driftwood Supply"));
        assert!(html.contains("Canvas Tote"));
        assert!(html.contains("$24.00"));
    }
}
