use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use countryfx_core::CurrencyCode;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub const CONVERSION_FAILURE: &str = "Cannot convert currency at this time";

pub fn router() -> Router {
    Router::new().route("/convert", post(convert_currency))
}

pub async fn convert_currency(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    body: Result<Json<dto::ConvertCurrencyRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text());
        }
    };

    // Malformed codes are rejected before any upstream traffic.
    let (from, to) = match (CurrencyCode::parse(&body.code), CurrencyCode::parse(&body.convert_to_code)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_currency_code", e.to_string());
        }
    };

    tracing::debug!(caller = caller.email(), %from, %to, amount = body.amount, "currency conversion");

    match services.country.convert_currency(&from, body.amount, &to).await {
        Ok(conversion) => (StatusCode::OK, Json(dto::ConversionResponse { conversion })).into_response(),
        Err(e) => errors::service_error_to_response(e, CONVERSION_FAILURE),
    }
}
