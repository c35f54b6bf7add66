use axum::Router;

pub mod auth;
pub mod country;
pub mod currency;
pub mod system;

/// Router for all authenticated endpoints (mounted under `/api/v1`).
pub fn protected_router() -> Router {
    Router::new()
        .nest("/country", country::router())
        .nest("/currency", currency::router())
}
