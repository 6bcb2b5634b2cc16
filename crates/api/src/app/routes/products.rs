use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use pasieka_core::ProductId;
use pasieka_products::{Product, ProductDetails};

use crate::app::{dto, errors};
use crate::context::AppContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product).put(update_product))
}

pub async fn list_products(Extension(ctx): Extension<Arc<AppContext>>) -> axum::response::Response {
    match ctx.store().snapshot() {
        Ok(snapshot) => {
            let views: Vec<dto::ProductView> =
                snapshot.products.into_iter().map(dto::ProductView::from).collect();
            Json(views).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match ctx.store().product(&ProductId::from_raw(id.as_str())) {
        Ok(Some(product)) => Json(dto::ProductView::from(product)).into_response(),
        Ok(None) => errors::not_found("product", &id),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(body): Json<ProductDetails>,
) -> axum::response::Response {
    let product = match Product::create(ProductId::generate(), body) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = ctx.store().insert_product(product.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(product = %product.id, name = %product.name, "product created");
    (StatusCode::CREATED, Json(dto::ProductView::from(product))).into_response()
}

pub async fn update_product(
    Extension(ctx): Extension<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<ProductDetails>,
) -> axum::response::Response {
    let store = ctx.store();
    let current = match store.product(&ProductId::from_raw(id.as_str())) {
        Ok(Some(p)) => p,
        Ok(None) => return errors::not_found("product", &id),
        Err(e) => return errors::store_error_to_response(e),
    };

    let product = match current.updated(body) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = store.update_product(product.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(product = %product.id, "product updated");
    Json(dto::ProductView::from(product)).into_response()
}
