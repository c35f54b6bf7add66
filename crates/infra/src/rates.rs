//! Exchange-rate API client (Fixer `latest` endpoint shape).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;

use countryfx_core::{CurrencyCode, RateTable};

use crate::error::UpstreamError;
use crate::http::{build_client, endpoint, get_json};

/// Source of the current rate table.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn latest_rates(&self) -> Result<RateTable, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct LatestRatesDto {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    rates: Option<HashMap<String, f64>>,
    #[serde(default)]
    error: Option<FixerErrorDto>,
}

#[derive(Debug, Deserialize)]
struct FixerErrorDto {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    info: Option<String>,
}

impl FixerErrorDto {
    fn describe(&self) -> String {
        let text = self
            .info
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("unknown error");
        match self.code {
            Some(code) => format!("{code}: {text}"),
            None => text.to_string(),
        }
    }
}

impl LatestRatesDto {
    fn into_table(self) -> Result<RateTable, UpstreamError> {
        if self.success == Some(false) {
            let reason = self
                .error
                .map(|e| e.describe())
                .unwrap_or_else(|| "success=false".to_string());
            return Err(UpstreamError::Rejected(reason));
        }

        let base = self
            .base
            .ok_or_else(|| UpstreamError::schema("missing `base`"))?;
        let base = CurrencyCode::parse(&base)
            .map_err(|e| UpstreamError::schema(format!("bad base currency: {e}")))?;

        let raw = self
            .rates
            .ok_or_else(|| UpstreamError::schema("missing `rates`"))?;
        let mut rates = HashMap::with_capacity(raw.len());
        for (code, rate) in raw {
            // Codes that are not three letters cannot be requested by clients anyway.
            match CurrencyCode::parse(&code) {
                Ok(code) => {
                    rates.insert(code, rate);
                }
                Err(_) => tracing::debug!(code = %code, "ignoring non-standard currency code"),
            }
        }

        RateTable::new(base, rates, self.date).map_err(|e| UpstreamError::schema(e.to_string()))
    }
}

pub struct FixerClient {
    client: Client,
    base_url: Url,
    access_key: String,
}

impl FixerClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(base_url: Url, access_key: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            access_key: access_key.into(),
        })
    }

    pub(crate) fn latest_url(&self) -> Result<Url, UpstreamError> {
        let mut url = endpoint(&self.base_url, &["latest"])?;
        url.query_pairs_mut().append_pair("access_key", &self.access_key);
        Ok(url)
    }
}

impl core::fmt::Debug for FixerClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixerClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RateSource for FixerClient {
    async fn latest_rates(&self) -> Result<RateTable, UpstreamError> {
        let url = self.latest_url()?;
        let table = get_json::<LatestRatesDto>(&self.client, url)
            .await
            .and_then(LatestRatesDto::into_table)
            .inspect_err(|e| {
                tracing::warn!(upstream = "rates", error = %e, "rate lookup failed");
            })?;

        tracing::debug!(
            base = %table.base(),
            as_of = ?table.as_of(),
            currencies = table.currency_count(),
            "rate table fetched"
        );
        Ok(table)
    }
}
