//! `countryfx-auth`: stateless bearer-token authentication.
//!
//! This crate is intentionally decoupled from HTTP: it signs and verifies
//! tokens and validates claim windows. Header parsing lives in the API crate.

pub mod claims;
pub mod email;
pub mod token;

pub use claims::{TokenClaims, TokenValidationError, validate_claims};
pub use email::{EmailError, LoginEmail};
pub use token::{DEFAULT_TOKEN_TTL_SECS, Hs256TokenService, JwtValidator, TokenError, TokenIssuer};
