//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::home::ProductView;
use crate::state::AppState;

/// Product quick view fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_quick_view.html")]
pub struct ProductQuickViewTemplate {
    pub product: ProductView,
}

/// Product quick view modal fragment (HTMX).
///
/// Looks the product up in the catalog slice the controller already holds;
/// no extra API round trip.
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductQuickViewTemplate> {
    let controller = state.controller().lock().await;

    let product = controller
        .products()
        .iter()
        .find(|product| product.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))?;

    Ok(ProductQuickViewTemplate {
        product: ProductView::from(product),
    })
}
