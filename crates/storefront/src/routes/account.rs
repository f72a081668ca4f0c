//! Account route handlers.
//!
//! The profile is a singleton document overwritten wholesale on save;
//! there is no authentication. Order history renders the append-only
//! orders document, newest first.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{Order, UserProfile};
use crate::state::AppState;

/// Profile display data for templates.
#[derive(Clone, Default)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub status: String,
    pub total: String,
    pub items: Vec<OrderItemView>,
}

/// Order line display data for templates.
#[derive(Clone)]
pub struct OrderItemView {
    pub title: String,
    pub qty: u32,
    pub price: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            date: order.date.clone(),
            status: order.status.to_string(),
            total: order.total.to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    title: item.title.clone(),
                    qty: item.qty,
                    price: item.price.to_string(),
                })
                .collect(),
        }
    }
}

/// Profile form data. Empty fields clear the stored value.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/show.html")]
pub struct AccountShowTemplate {
    pub profile: ProfileView,
    pub recent_orders: Vec<OrderView>,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrderHistoryTemplate {
    pub orders: Vec<OrderView>,
}

/// Number of orders shown on the account overview.
const RECENT_ORDER_COUNT: usize = 3;

/// Display account page: profile form plus most recent orders.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> AccountShowTemplate {
    let profile = state.store().profile();
    let orders = state.store().orders();

    AccountShowTemplate {
        profile: ProfileView::from(&profile),
        recent_orders: orders
            .iter()
            .rev()
            .take(RECENT_ORDER_COUNT)
            .map(OrderView::from)
            .collect(),
    }
}

/// Save the profile, overwriting the previous document wholesale.
#[instrument(skip(state, form))]
pub async fn save_profile(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect> {
    let profile = UserProfile {
        name: non_empty(form.name),
        email: non_empty(form.email),
        phone: non_empty(form.phone),
    };
    state.store().save_profile(&profile)?;

    Ok(Redirect::to("/account"))
}

/// Display the full order history, newest first.
#[instrument(skip(state))]
pub async fn orders(State(state): State<AppState>) -> OrderHistoryTemplate {
    OrderHistoryTemplate {
        orders: state.store().orders().iter().rev().map(OrderView::from).collect(),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
