use chrono::{DateTime, Utc};

use countryfx_auth::TokenClaims;

/// Authenticated caller, inserted into request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    email: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    pub fn new(email: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            email: email.into(),
            expires_at,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl From<TokenClaims> for AuthContext {
    fn from(claims: TokenClaims) -> Self {
        let expires_at = claims.expires_at();
        Self::new(claims.email, expires_at)
    }
}
