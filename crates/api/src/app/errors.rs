//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use countryfx_core::DomainError;

use crate::app::services::ServiceError;

pub const INVALID_TOKEN: &str = "Invalid token";

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Body carrying only a `message`, used for 400s at the boundary and for 401s.
pub fn message_only(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}

pub fn invalid_token() -> Response {
    message_only(StatusCode::UNAUTHORIZED, INVALID_TOKEN)
}

/// Map a service failure to a response.
///
/// Upstream failures become a 500 carrying `failure_message` and the error's
/// kind code; the underlying error text is logged, never returned.
pub fn service_error_to_response(err: ServiceError, failure_message: &'static str) -> Response {
    match err {
        ServiceError::Upstream(e) => {
            tracing::error!(error = %e, kind = e.kind(), "{failure_message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e.kind(), failure_message)
        }
        ServiceError::Domain(e @ DomainError::InvalidCurrencyCode(_)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_currency_code", e.to_string())
        }
        ServiceError::Domain(e @ DomainError::Validation(_)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
    }
}
