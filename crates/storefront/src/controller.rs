//! Storefront state container.
//!
//! Owns the three slices of remote state the views render (merchant,
//! products, cart) plus one local-only flag (cart drawer visibility), and
//! forwards user intents to the commerce API.
//!
//! # State discipline
//!
//! Each slice is only ever a verbatim copy of the last successful API
//! response for that slice. Nothing is merged, no total is recomputed, and
//! a failed call leaves state exactly as it was: failures are logged and
//! swallowed, with no retry and no stored error. Overlapping calls are not
//! coordinated; whichever response is applied last wins.

use tracing::error;

use driftwood_core::{LineItemId, ProductId};

use crate::chec::{Cart, ChecError, CommerceApi, Merchant, Product};

/// State container for the storefront views.
///
/// Generic over the commerce API so tests can script responses. In the
/// running binary this is `StorefrontController<ChecClient>` shared behind
/// an async mutex in [`crate::state::AppState`].
pub struct StorefrontController<C> {
    api: C,
    merchant: Option<Merchant>,
    products: Vec<Product>,
    cart: Option<Cart>,
    cart_visible: bool,
}

impl<C: CommerceApi> StorefrontController<C> {
    /// Create a controller with empty state.
    ///
    /// Nothing is fetched until [`start`](Self::start) runs.
    pub const fn new(api: C) -> Self {
        Self {
            api,
            merchant: None,
            products: Vec::new(),
            cart: None,
            cart_visible: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Merchant profile, if fetched.
    pub const fn merchant(&self) -> Option<&Merchant> {
        self.merchant.as_ref()
    }

    /// Product catalog; empty until fetched.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current cart, if one exists yet.
    pub const fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Whether the cart drawer is shown.
    pub const fn cart_visible(&self) -> bool {
        self.cart_visible
    }

    /// Total item count across the cart, 0 when no cart exists yet.
    pub fn total_items(&self) -> u32 {
        self.cart.as_ref().map_or(0, |cart| cart.total_items)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetch merchant, products, and cart concurrently.
    ///
    /// The three fetches are independent and unordered. Each success
    /// replaces its slice; each failure is logged and leaves the prior
    /// (initially empty) slice untouched.
    pub async fn start(&mut self) {
        let api = &self.api;
        let cart_id = self.cart.as_ref().map(|cart| cart.id.clone());

        // Retrieve the cart we already know about, or have the API mint one
        let cart_fut = async move {
            match cart_id {
                Some(id) => api.get_cart(&id).await,
                None => api.create_cart().await,
            }
        };

        let (merchant, products, cart) =
            tokio::join!(api.merchant_about(), api.list_products(), cart_fut);

        match merchant {
            Ok(merchant) => self.merchant = Some(merchant),
            Err(e) => error!("There was an error fetching the merchant details: {e}"),
        }

        match products {
            Ok(products) => self.products = products,
            Err(e) => error!("There was an error fetching the products: {e}"),
        }

        match cart {
            Ok(cart) => self.cart = Some(cart),
            Err(e) => error!("There was an error fetching the cart: {e}"),
        }
    }

    /// Show or hide the cart drawer.
    ///
    /// Pure local state change; nothing is persisted.
    pub const fn toggle_cart_visibility(&mut self) {
        self.cart_visible = !self.cart_visible;
    }

    /// Add a product to the cart.
    ///
    /// Creates a cart first if none exists yet. On success the cart slice is
    /// replaced with the API's response; on failure it is left unchanged.
    pub async fn add_to_cart(&mut self, product_id: &ProductId, quantity: u32) {
        let result = match &self.cart {
            Some(cart) => self.api.add_to_cart(&cart.id, product_id, quantity).await,
            None => match self.api.create_cart().await {
                Ok(cart) => self.api.add_to_cart(&cart.id, product_id, quantity).await,
                Err(e) => Err(e),
            },
        };

        self.apply_cart_result(result, "adding the item to the cart");
    }

    /// Change the quantity of one line item.
    pub async fn update_cart_item(&mut self, line_item_id: &LineItemId, quantity: u32) {
        let Some(cart) = &self.cart else {
            return;
        };

        let result = self
            .api
            .update_cart_item(&cart.id, line_item_id, quantity)
            .await;
        self.apply_cart_result(result, "updating the cart items");
    }

    /// Remove one line item from the cart.
    pub async fn remove_cart_item(&mut self, line_item_id: &LineItemId) {
        let Some(cart) = &self.cart else {
            return;
        };

        let result = self.api.remove_cart_item(&cart.id, line_item_id).await;
        self.apply_cart_result(result, "removing the item from the cart");
    }

    /// Remove every line item from the cart.
    pub async fn empty_cart(&mut self) {
        let Some(cart) = &self.cart else {
            return;
        };

        let result = self.api.empty_cart(&cart.id).await;
        self.apply_cart_result(result, "emptying the cart");
    }

    /// Replace the cart slice on success; log and keep prior state on failure.
    fn apply_cart_result(&mut self, result: Result<Cart, ChecError>, action: &str) {
        match result {
            Ok(cart) => self.cart = Some(cart),
            Err(e) => error!("There was an error {action}: {e}"),
        }
    }
}
