use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use pasieka_analytics::Dashboard;

use crate::app::errors;
use crate::context::AppContext;

pub async fn dashboard(Extension(ctx): Extension<Arc<AppContext>>) -> axum::response::Response {
    let snapshot = match ctx.store().snapshot() {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };
    Json(Dashboard::compute(&snapshot, ctx.dashboard_config())).into_response()
}
