//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: country/currency orchestration over the upstream clients
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use countryfx_auth::{Hs256TokenService, JwtValidator};
use countryfx_infra::{FixerClient, RestCountriesClient};

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router from configuration (public entrypoint used by `main.rs`).
///
/// Fails only if an HTTP client cannot be constructed.
pub fn build_app(config: &AppConfig) -> Result<Router, reqwest::Error> {
    let countries = Arc::new(RestCountriesClient::new(
        config.country_api.clone(),
        config.upstream_timeout,
    )?);
    let rates = Arc::new(FixerClient::new(
        config.fixer_api.clone(),
        config.fixer_access_key.clone(),
        config.upstream_timeout,
    )?);
    let tokens = Arc::new(Hs256TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl));

    let services = services::AppServices {
        country: services::CountryService::new(countries, rates, config.target_currency.clone()),
        tokens: tokens.clone(),
    };

    Ok(build_router(Arc::new(services), tokens))
}

/// Assemble the router around already-built services.
pub fn build_router(services: Arc<services::AppServices>, jwt: Arc<dyn JwtValidator>) -> Router {
    let auth_state = middleware::AuthState { jwt };

    // Protected routes: require a valid bearer token.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    let v1 = Router::new()
        .nest("/auth", routes::auth::router())
        .merge(protected);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/api", get(routes::system::hello))
        .nest("/api/v1", v1)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_context)))
}
