use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use pasieka_core::OrderId;
use pasieka_parties::Customer;
use pasieka_sales::{ChangeFulfillmentStatus, Order, PlaceOrder};

use crate::app::errors;
use crate::context::AppContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(place_order).get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id/status", post(change_status))
}

pub async fn list_orders(Extension(ctx): Extension<Arc<AppContext>>) -> axum::response::Response {
    match ctx.store().snapshot() {
        Ok(snapshot) => Json(snapshot.orders).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match ctx.store().order(&OrderId::from_raw(id.as_str())) {
        Ok(Some(order)) => Json(order).into_response(),
        Ok(None) => errors::not_found("order", &id),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Save a new order and record it on the customer keyed by the name slug.
pub async fn place_order(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(body): Json<PlaceOrder>,
) -> axum::response::Response {
    let order = match Order::place(OrderId::generate(), body, ctx.default_seller(), Utc::now()) {
        Ok(o) => o,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let first_order_customer = match Customer::from_first_order(&order.customer_name, order.total) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let customer = match ctx.store().record_order(order.clone(), first_order_customer) {
        Ok(c) => c,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::info!(
        order = %order.id,
        customer = %customer.id,
        order_count = customer.order_count,
        total = %order.total,
        "order placed"
    );
    (StatusCode::CREATED, Json(order)).into_response()
}

pub async fn change_status(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<ChangeFulfillmentStatus>,
) -> axum::response::Response {
    let store = ctx.store();
    let order = match store.order(&OrderId::from_raw(id.as_str())) {
        Ok(Some(o)) => o,
        Ok(None) => return errors::not_found("order", &id),
        Err(e) => return errors::store_error_to_response(e),
    };

    let updated = match order.with_fulfillment_status(body) {
        Ok(o) => o,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = store.update_order(updated.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(order = %updated.id, status = %updated.fulfillment_status, "order status changed");
    Json(updated).into_response()
}
