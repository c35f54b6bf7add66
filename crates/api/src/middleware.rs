use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use countryfx_auth::{JwtValidator, TokenClaims, TokenError};

use crate::app::errors;
use crate::context::AuthContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Why a request was refused. Only logged; clients always see "Invalid token".
#[derive(Debug, Error)]
enum AuthFailure {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("authorization header is not a bearer token")]
    NotBearer,

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub async fn auth_middleware(State(state): State<AuthState>, mut req: Request, next: Next) -> Response {
    let claims = match authenticate(&state, req.headers()) {
        Ok(claims) => claims,
        Err(reason) => {
            tracing::info!(%reason, "rejecting unauthenticated request");
            return errors::invalid_token();
        }
    };

    let caller = AuthContext::from(claims);
    tracing::debug!(email = caller.email(), expires_at = ?caller.expires_at(), "authenticated request");
    req.extensions_mut().insert(caller);
    next.run(req).await
}

fn authenticate(state: &AuthState, headers: &HeaderMap) -> Result<TokenClaims, AuthFailure> {
    let token = extract_bearer(headers)?;
    Ok(state.jwt.validate(token, Utc::now())?)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthFailure> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthFailure::MissingHeader)?;

    let header = header.to_str().map_err(|_| AuthFailure::NotBearer)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthFailure::NotBearer)?
        .trim();

    if token.is_empty() {
        return Err(AuthFailure::NotBearer);
    }

    Ok(token)
}

/// Wrap every request in a span tagged with a fresh request id, and echo the
/// id back in the `x-request-id` response header.
pub async fn request_context(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path()
    );

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;

        tracing::info!(
            status = res.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    }
    .instrument(span)
    .await
}
