//! Service configuration, read once at startup.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by `main`). Nothing else in the crate reads the environment.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use countryfx_auth::DEFAULT_TOKEN_TTL_SECS;
use countryfx_core::CurrencyCode;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_SECRET: &str = "dev-secret";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TARGET_CURRENCY: &str = "SEK";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the country API (`COUNTRY_API`).
    pub country_api: Url,
    /// Base URL of the rates API (`FIXER_API`).
    pub fixer_api: Url,
    pub fixer_access_key: String,
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    /// Per-request budget for each upstream call.
    pub upstream_timeout: Duration,
    /// Currency every country is valued in (`currencyToSEK`).
    pub target_currency: CurrencyCode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", e))?;

        let country_api = parse_url("COUNTRY_API", get("COUNTRY_API"))?;
        let fixer_api = parse_url("FIXER_API", get("FIXER_API"))?;
        let fixer_access_key = get("FIXER_ACCESS_KEY").ok_or(ConfigError::Missing("FIXER_ACCESS_KEY"))?;

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_ttl_secs = parse_positive("TOKEN_TTL_SECS", get("TOKEN_TTL_SECS"), DEFAULT_TOKEN_TTL_SECS as u64)?;
        let token_ttl = i64::try_from(token_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .ok_or_else(|| ConfigError::invalid("TOKEN_TTL_SECS", "out of range"))?;

        let upstream_timeout = Duration::from_millis(parse_positive(
            "UPSTREAM_TIMEOUT_MS",
            get("UPSTREAM_TIMEOUT_MS"),
            DEFAULT_UPSTREAM_TIMEOUT_MS,
        )?);

        let target_currency = CurrencyCode::parse(
            &get("TARGET_CURRENCY").unwrap_or_else(|| DEFAULT_TARGET_CURRENCY.to_string()),
        )
        .map_err(|e| ConfigError::invalid("TARGET_CURRENCY", e))?;

        Ok(Self {
            bind_addr,
            country_api,
            fixer_api,
            fixer_access_key,
            jwt_secret,
            token_ttl,
            upstream_timeout,
            target_currency,
        })
    }
}

impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("country_api", &self.country_api.as_str())
            .field("fixer_api", &self.fixer_api.as_str())
            .field("fixer_access_key", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("target_currency", &self.target_currency)
            .finish()
    }
}

fn parse_url(var: &'static str, value: Option<String>) -> Result<Url, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(var))?;
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::invalid(var, e))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::invalid(var, "must be a hierarchical http(s) URL"));
    }
    Ok(url)
}

fn parse_positive(var: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(var, "must be greater than zero")),
        Ok(v) => Ok(v),
        Err(e) => Err(ConfigError::invalid(var, e)),
    }
}
