use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::errors;
use crate::context::AppContext;

/// The three raw collections, as the dashboard and the assistant see them.
pub async fn snapshot(Extension(ctx): Extension<Arc<AppContext>>) -> axum::response::Response {
    match ctx.store().snapshot() {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
