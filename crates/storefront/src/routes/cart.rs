//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation re-renders the affected fragment and fires an HX-Trigger
//! so the badges and the cart table never diverge from the store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use ethereal_eve_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::models::CartLine;
use crate::services::{CartService, cart::AddToCart};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    /// Position in the cart document; mutation forms post it back.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub qty: u32,
    pub price: String,
    pub line_price: String,
    pub img: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Project the current cart document into display data.
    fn from_lines(lines: &[CartLine]) -> Self {
        let items = lines
            .iter()
            .enumerate()
            .map(|(index, line)| CartItemView {
                index,
                id: line.id.to_string(),
                title: line.title.clone(),
                qty: line.qty,
                price: line.price.to_string(),
                line_price: line.line_total().to_string(),
                img: line.img.clone(),
            })
            .collect();

        Self {
            items,
            subtotal: lines
                .iter()
                .map(CartLine::line_total)
                .sum::<ethereal_eve_core::Price>()
                .to_string(),
            item_count: lines
                .iter()
                .fold(0u32, |acc, line| acc.saturating_add(line.qty)),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
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

/// Toast notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartShowTemplate {
    let service = CartService::new(state.store(), state.catalog());
    CartShowTemplate {
        cart: CartView::from_lines(&service.lines()),
    }
}

/// Add item to cart (HTMX).
///
/// Merges by product id; an unknown id is a silent no-op. Every add
/// triggers the badge refresh, mutation or not; on success a toast comes
/// back too.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let service = CartService::new(state.store(), state.catalog());
    let outcome = service.add(&ProductId::new(form.product_id), form.quantity.unwrap_or(1))?;

    Ok(match outcome {
        AddToCart::Added { title } => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            ToastTemplate {
                message: format!("{title} added to cart"),
            },
        )
            .into_response(),
        AddToCart::UnknownProduct => (
            StatusCode::NO_CONTENT,
            AppendHeaders([("HX-Trigger", "cart-updated")]),
        )
            .into_response(),
    })
}

/// Update cart line quantity (HTMX).
///
/// Quantities below one clamp to one; the refreshed cart table comes back.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<impl IntoResponse> {
    let service = CartService::new(state.store(), state.catalog());
    service.set_quantity(form.index, form.quantity)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from_lines(&service.lines()),
        },
    ))
}

/// Remove cart line (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<impl IntoResponse> {
    let service = CartService::new(state.store(), state.catalog());
    service.remove(form.index)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from_lines(&service.lines()),
        },
    ))
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> CartCountTemplate {
    let service = CartService::new(state.store(), state.catalog());
    CartCountTemplate {
        count: service.count(),
    }
}
