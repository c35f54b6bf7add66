use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub const COUNTRY_FAILURE: &str = "Cannot get country details at this time";

pub fn router() -> Router {
    Router::new().route("/:country", get(get_country))
}

pub async fn get_country(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<AuthContext>,
    Path(country): Path<String>,
) -> axum::response::Response {
    tracing::debug!(caller = caller.email(), %country, "country lookup");

    match services.country.get_country(&country).await {
        Ok(payload) => (StatusCode::OK, Json(dto::CountryResponse { payload })).into_response(),
        Err(e) => errors::service_error_to_response(e, COUNTRY_FAILURE),
    }
}
