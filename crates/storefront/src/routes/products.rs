//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use ethereal_eve_core::ProductId;

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::home::ProductCardView;
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<String>,
    pub active_category: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductCardView,
    pub related_products: Vec<ProductCardView>,
}

/// Display product listing page, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ProductsIndexTemplate {
    let catalog = state.catalog();

    let products: Vec<ProductCardView> = match query.category.as_deref() {
        Some(category) => catalog
            .by_category(category)
            .map(ProductCardView::from)
            .collect(),
        None => catalog.products().iter().map(ProductCardView::from).collect(),
    };

    ProductsIndexTemplate {
        products,
        categories: catalog
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        active_category: query.category,
    }
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let catalog = state.catalog();
    let id = ProductId::new(id);

    let product = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    // Other products in the same category, in catalog order.
    let related_products: Vec<ProductCardView> = catalog
        .by_category(&product.category)
        .filter(|p| p.id != product.id)
        .map(ProductCardView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductCardView::from(product),
        related_products,
    })
}
