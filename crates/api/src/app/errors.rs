use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pasieka_assistant::AssistantError;
use pasieka_core::DomainError;
use pasieka_infra::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "conflict", msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match &err {
        StoreError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StoreError::Conflict { .. } => json_error(StatusCode::CONFLICT, "conflict", err.to_string()),
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "entity store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
        }
    }
}

pub fn assistant_error_to_response(err: AssistantError) -> axum::response::Response {
    match err {
        AssistantError::EmptyQuestion => {
            json_error(StatusCode::BAD_REQUEST, "empty_question", err.to_string())
        }
        AssistantError::NotConfigured => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "not_configured", err.to_string())
        }
        AssistantError::Upstream(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg),
        AssistantError::Transport(msg) => json_error(StatusCode::BAD_GATEWAY, "transport_error", msg),
    }
}

pub fn not_found(kind: &'static str, id: &str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{kind} not found: {id}"))
}
