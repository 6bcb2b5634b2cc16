use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::{dto, errors};
use crate::context::AppContext;

pub async fn ask(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(body): Json<dto::AskRequest>,
) -> axum::response::Response {
    let snapshot = match ctx.store().snapshot() {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };
    let question = body.question.unwrap_or_default();

    match ctx.assistant().ask(&question, &snapshot).await {
        Ok(answer) => Json(dto::AskResponse { answer }).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "assistant request failed");
            errors::assistant_error_to_response(e)
        }
    }
}
