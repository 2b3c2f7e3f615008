//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every handler forwards the user intent to the shared controller and
//! re-renders from whatever state the controller holds afterwards - on a
//! failed remote call that is simply the prior cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use driftwood_core::{LineItemId, ProductId};

use crate::chec::{Cart, LineItem};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view, for when no cart has been fetched yet.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: String::new(),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.line_items.iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal.display().to_string(),
            item_count: cart.total_items,
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.display().to_string(),
            line_total: line.line_total.display().to_string(),
            image: line.media.as_ref().map(|media| ImageView {
                url: media.source.clone(),
            }),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_item_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_item_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
    pub cart_visible: bool,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Show or hide the cart drawer (HTMX).
///
/// Pure local state change; no remote call is made.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>) -> impl IntoResponse {
    let mut controller = state.controller().lock().await;
    controller.toggle_cart_visibility();

    CartDrawerTemplate {
        cart: controller.cart().map_or_else(CartView::empty, CartView::from),
        cart_visible: controller.cart_visible(),
    }
}

/// Add item to cart (HTMX).
///
/// Creates a cart first if one doesn't exist yet. Returns the cart count
/// badge with an HTMX trigger so other fragments refresh themselves.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    let product_id = ProductId::new(form.product_id);
    let quantity = form.quantity.unwrap_or(1);

    let mut controller = state.controller().lock().await;
    controller.add_to_cart(&product_id, quantity).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: controller.total_items(),
        },
    )
        .into_response()
}

/// Update cart item quantity (HTMX).
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    let line_item_id = LineItemId::new(form.line_item_id);

    let mut controller = state.controller().lock().await;
    controller.update_cart_item(&line_item_id, form.quantity).await;

    cart_items_response(&controller.cart().map_or_else(CartView::empty, CartView::from))
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let line_item_id = LineItemId::new(form.line_item_id);

    let mut controller = state.controller().lock().await;
    controller.remove_cart_item(&line_item_id).await;

    cart_items_response(&controller.cart().map_or_else(CartView::empty, CartView::from))
}

/// Empty cart contents (HTMX).
#[instrument(skip(state))]
pub async fn empty(State(state): State<AppState>) -> Response {
    let mut controller = state.controller().lock().await;
    controller.empty_cart().await;

    cart_items_response(&controller.cart().map_or_else(CartView::empty, CartView::from))
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let controller = state.controller().lock().await;

    CartCountTemplate {
        count: controller.total_items(),
    }
}

/// Render the cart items fragment with the `cart-updated` trigger attached.
fn cart_items_response(cart: &CartView) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart: cart.clone() },
    )
        .into_response()
}
