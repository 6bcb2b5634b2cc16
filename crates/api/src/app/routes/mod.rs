use axum::{
    Router,
    routing::{get, post},
};

pub mod assistant;
pub mod customers;
pub mod dashboard;
pub mod data;
pub mod orders;
pub mod products;
pub mod system;

/// Router for every data endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/data", get(data::snapshot))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/ask-ai", post(assistant::ask))
        .nest("/orders", orders::router())
        .nest("/products", products::router())
        .nest("/customers", customers::router())
}
