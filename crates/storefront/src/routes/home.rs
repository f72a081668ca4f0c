//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::Product;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub rating: u8,
    pub img: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            rating: product.rating,
            img: product.img.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Full product grid.
    pub products: Vec<ProductCardView>,
    /// Category names for the filter bar.
    pub categories: Vec<String>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
        products: catalog.products().iter().map(ProductCardView::from).collect(),
        categories: catalog
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}
