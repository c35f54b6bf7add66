use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use countryfx_auth::{EmailError, LoginEmail};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

/// Issue a token for any present email. There is no credential check.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> axum::response::Response {
    let email = match body {
        Ok(Json(body)) => LoginEmail::parse(body.email.as_deref()),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable login body");
            Err(EmailError::Missing)
        }
    };

    let Ok(email) = email else {
        return errors::message_only(StatusCode::BAD_REQUEST, "Email is required");
    };

    match services.tokens.issue(email.as_str(), Utc::now()) {
        Ok(token) => {
            tracing::info!(email = email.as_str(), "issued token");
            (StatusCode::OK, Json(dto::LoginResponse { token })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token signing failed");
            errors::message_only(StatusCode::INTERNAL_SERVER_ERROR, "Cannot log in at this time")
        }
    }
}
