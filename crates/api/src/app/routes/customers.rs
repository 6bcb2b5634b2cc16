use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use pasieka_analytics::{orders_for_customer, summarize_customers};
use pasieka_core::CustomerId;
use pasieka_parties::{ContactDetails, Customer};

use crate::app::{dto, errors};
use crate::context::AppContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route("/:id", get(get_customer).put(update_customer))
}

/// Customers with order count and spend recomputed from the orders.
pub async fn list_customers(Extension(ctx): Extension<Arc<AppContext>>) -> axum::response::Response {
    match ctx.store().snapshot() {
        Ok(snapshot) => Json(summarize_customers(&snapshot.customers, &snapshot.orders)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_customer(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let snapshot = match ctx.store().snapshot() {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };
    let customer_id = CustomerId::from_raw(id.as_str());
    let Some(customer) = snapshot.customers.iter().find(|c| c.id == customer_id) else {
        return errors::not_found("customer", &id);
    };

    let summary = summarize_customers(std::slice::from_ref(customer), &snapshot.orders);
    let Some(summary) = summary.into_iter().next() else {
        return errors::not_found("customer", &id);
    };
    let orders = orders_for_customer(&snapshot.orders, &customer.name)
        .into_iter()
        .cloned()
        .collect();

    Json(dto::CustomerDetail { summary, orders }).into_response()
}

pub async fn create_customer(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(body): Json<ContactDetails>,
) -> axum::response::Response {
    let customer = match Customer::register(body) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = ctx.store().insert_customer(customer.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(customer = %customer.id, "customer registered");
    (StatusCode::CREATED, Json(customer)).into_response()
}

pub async fn update_customer(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<ContactDetails>,
) -> axum::response::Response {
    let store = ctx.store();
    let current = match store.customer(&CustomerId::from_raw(id.as_str())) {
        Ok(Some(c)) => c,
        Ok(None) => return errors::not_found("customer", &id),
        Err(e) => return errors::store_error_to_response(e),
    };

    let customer = match current.updated(body) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = store.update_customer(customer.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(customer = %customer.id, "customer updated");
    Json(customer).into_response()
}
