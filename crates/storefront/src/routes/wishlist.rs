//! Wishlist route handlers.
//!
//! Same fragment pattern as the cart routes: mutations return the
//! refreshed wishlist fragment or a toast, plus HX-Trigger headers for
//! the badges.

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
use crate::models::FavouriteEntry;
use crate::routes::cart::ToastTemplate;
use crate::services::{WishlistService, wishlist::AddToFavourites};
use crate::state::AppState;

/// Favourite entry display data for templates.
#[derive(Clone)]
pub struct WishlistItemView {
    /// Position in the favourites document.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub price: String,
    pub img: String,
}

/// Wishlist display data for templates.
#[derive(Clone)]
pub struct WishlistView {
    pub items: Vec<WishlistItemView>,
}

impl WishlistView {
    fn from_entries(entries: &[FavouriteEntry]) -> Self {
        Self {
            items: entries
                .iter()
                .enumerate()
                .map(|(index, entry)| WishlistItemView {
                    index,
                    id: entry.id.to_string(),
                    title: entry.title.clone(),
                    price: entry.price.to_string(),
                    img: entry.img.clone(),
                })
                .collect(),
        }
    }
}

/// Add to wishlist form data.
#[derive(Debug, Deserialize)]
pub struct AddToWishlistForm {
    pub product_id: String,
}

/// Remove from wishlist form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromWishlistForm {
    pub index: usize,
}

/// Move favourite to cart form data.
#[derive(Debug, Deserialize)]
pub struct MoveToCartForm {
    pub product_id: String,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistShowTemplate {
    pub wishlist: WishlistView,
}

/// Wishlist items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/wishlist_items.html")]
pub struct WishlistItemsTemplate {
    pub wishlist: WishlistView,
}

/// Wishlist count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/wishlist_count.html")]
pub struct WishlistCountTemplate {
    pub count: u32,
}

/// Display wishlist page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> WishlistShowTemplate {
    let service = WishlistService::new(state.store(), state.catalog());
    WishlistShowTemplate {
        wishlist: WishlistView::from_entries(&service.entries()),
    }
}

/// Add product to wishlist (HTMX).
///
/// A duplicate add mutates nothing and comes back with a distinct notice.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToWishlistForm>,
) -> Result<Response> {
    let service = WishlistService::new(state.store(), state.catalog());
    let outcome = service.add(&ProductId::new(form.product_id))?;

    Ok(match outcome {
        AddToFavourites::Added { title } => (
            AppendHeaders([("HX-Trigger", "wishlist-updated")]),
            ToastTemplate {
                message: format!("{title} added to favourites"),
            },
        )
            .into_response(),
        AddToFavourites::AlreadyPresent { title } => ToastTemplate {
            message: format!("{title} is already in favourites!"),
        }
        .into_response(),
        AddToFavourites::UnknownProduct => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Remove wishlist entry (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromWishlistForm>,
) -> Result<impl IntoResponse> {
    let service = WishlistService::new(state.store(), state.catalog());
    service.remove(form.index)?;

    Ok((
        AppendHeaders([("HX-Trigger", "wishlist-updated")]),
        WishlistItemsTemplate {
            wishlist: WishlistView::from_entries(&service.entries()),
        },
    ))
}

/// Move favourite into the cart (HTMX).
///
/// Merges into the cart and drops the favourite; both badges refresh.
#[instrument(skip(state))]
pub async fn move_to_cart(
    State(state): State<AppState>,
    Form(form): Form<MoveToCartForm>,
) -> Result<impl IntoResponse> {
    let service = WishlistService::new(state.store(), state.catalog());
    service.move_to_cart(&ProductId::new(form.product_id))?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated, wishlist-updated")]),
        WishlistItemsTemplate {
            wishlist: WishlistView::from_entries(&service.entries()),
        },
    ))
}

/// Get wishlist count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> WishlistCountTemplate {
    let service = WishlistService::new(state.store(), state.catalog());
    WishlistCountTemplate {
        count: service.count(),
    }
}
