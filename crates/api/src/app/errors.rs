use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use salebook_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        DomainError::MissingFields(_) => {
            json_error(StatusCode::BAD_REQUEST, "missing_fields", err.to_string())
        }
        DomainError::InvalidStatus(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_status", err.to_string())
        }
        DomainError::EmptyId => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "empty_id", err.to_string())
        }
    }
}

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
