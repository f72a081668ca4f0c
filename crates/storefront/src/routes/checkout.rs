//! Checkout route handlers.
//!
//! The mock transaction spans three requests: `POST /checkout/select`
//! parks the chosen cart positions in the session (Idle ->
//! SelectionPending), `GET /checkout` materializes them against the
//! current cart into the payment view (SelectionPending ->
//! PaymentPending), and `POST /checkout/complete` turns them into an
//! immutable order (PaymentPending -> Completed). A selection that no
//! longer resolves - the cart may have changed underneath it - aborts
//! back to Idle with an empty-state message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{RawForm, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{CartLine, session_keys};
use crate::services::{CheckoutService, checkout::CheckoutError};
use crate::state::AppState;
use tower_sessions::Session;

/// A selected line in the checkout summary.
#[derive(Clone)]
pub struct SelectedItemView {
    pub title: String,
    pub qty: u32,
    pub price: String,
    pub line_price: String,
    pub img: String,
}

impl From<&CartLine> for SelectedItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            title: line.title.clone(),
            qty: line.qty,
            price: line.price.to_string(),
            line_price: line.line_total().to_string(),
            img: line.img.clone(),
        }
    }
}

/// Mock payment form data. Presence is the only validation.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub card_name: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
}

/// Payment view template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub items: Vec<SelectedItemView>,
    pub subtotal: String,
}

/// Empty-state template shown when the selection resolves to nothing.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate;

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub order_id: String,
    pub total: String,
    pub date: String,
}

/// Read the transient selection slot.
async fn get_selection(session: &Session) -> Vec<usize> {
    session
        .get::<Vec<usize>>(session_keys::CHECKOUT_SELECTION)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Clear the transient selection slot, returning the transaction to Idle.
async fn clear_selection(session: &Session) -> Result<()> {
    let _previous = session
        .remove::<Vec<usize>>(session_keys::CHECKOUT_SELECTION)
        .await?;
    Ok(())
}

/// Mark cart positions for checkout.
///
/// The form posts one `selected=<index>` pair per checked line. The
/// indices go into the session slot only, never the document store; an
/// empty selection clears the slot and is reported without starting a
/// transaction.
#[instrument(skip(session, form))]
pub async fn select(session: Session, RawForm(form): RawForm) -> Result<Response> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&form)
        .map_err(|e| AppError::BadRequest(format!("malformed selection form: {e}")))?;

    let selected: Vec<usize> = pairs
        .iter()
        .filter(|(key, _)| key == "selected")
        .filter_map(|(_, value)| value.parse().ok())
        .collect();

    if selected.is_empty() {
        // Abandoning the transaction; a stale slot from an earlier select
        // must not resurface on the next GET /checkout.
        clear_selection(&session).await?;
        return Ok(CheckoutEmptyTemplate.into_response());
    }

    session
        .insert(session_keys::CHECKOUT_SELECTION, &selected)
        .await?;

    Ok(Redirect::to("/checkout").into_response())
}

/// Display the payment view over the stored selection.
///
/// Resolution happens against the *current* cart document; a selection
/// that yields nothing aborts the transaction back to Idle.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let selected = get_selection(&session).await;

    let service = CheckoutService::new(state.store());
    match service.resolve(&selected) {
        Ok(resolved) => Ok(CheckoutShowTemplate {
            items: resolved.items.iter().map(SelectedItemView::from).collect(),
            subtotal: resolved.subtotal.to_string(),
        }
        .into_response()),
        Err(CheckoutError::EmptySelection) => {
            clear_selection(&session).await?;
            Ok(CheckoutEmptyTemplate.into_response())
        }
        Err(CheckoutError::Store(e)) => Err(AppError::Store(e)),
    }
}

/// Complete the mock payment.
///
/// The form fields are required but unvalidated beyond presence. On
/// success the order is recorded, the purchased lines leave the cart, and
/// the selection slot is cleared.
#[instrument(skip(state, session, form))]
pub async fn complete(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Response> {
    // Presence-only validation; extraction already rejected a form with
    // missing fields, and the values themselves are never inspected.
    drop(form);

    let selected = get_selection(&session).await;

    let service = CheckoutService::new(state.store());
    match service.complete(&selected) {
        Ok(order) => {
            clear_selection(&session).await?;
            tracing::info!(order_id = %order.id, total = %order.total, "order placed");
            Ok(CheckoutCompleteTemplate {
                order_id: order.id.to_string(),
                total: order.total.to_string(),
                date: order.date,
            }
            .into_response())
        }
        Err(CheckoutError::EmptySelection) => {
            clear_selection(&session).await?;
            Ok(CheckoutEmptyTemplate.into_response())
        }
        Err(CheckoutError::Store(e)) => Err(AppError::Store(e)),
    }
}
