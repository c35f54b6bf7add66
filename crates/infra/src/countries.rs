//! Country API client (REST Countries v2 shape).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use countryfx_core::Country;

use crate::error::UpstreamError;
use crate::http::{build_client, endpoint, get_json};

/// Fields requested from the country API; everything else is left out upstream.
const COUNTRY_FIELDS: &str = "name;currencies;population";

/// Source of country metadata.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// All countries whose name matches `name`.
    async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, UpstreamError>;
}

pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
}

impl RestCountriesClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
        })
    }

    pub(crate) fn url_for(&self, name: &str) -> Result<Url, UpstreamError> {
        let mut url = endpoint(&self.base_url, &["name", name])?;
        // `;` is kept literal: the API splits the field list on it.
        url.set_query(Some(&format!("fields={COUNTRY_FIELDS}")));
        Ok(url)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, UpstreamError> {
        let url = self.url_for(name)?;
        let countries: Vec<Country> = get_json(&self.client, url).await.inspect_err(|e| {
            tracing::warn!(upstream = "countries", country = name, error = %e, "country lookup failed");
        })?;

        tracing::debug!(country = name, matches = countries.len(), "country lookup succeeded");
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_name_and_field_list() {
        let client = RestCountriesClient::new(
            Url::parse("https://restcountries.example/v2").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();

        let url = client.url_for("nigeria").unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.example/v2/name/nigeria?fields=name;currencies;population"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_an_upstream_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = RestCountriesClient::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Duration::from_millis(500),
        )
        .unwrap();

        let err = client.countries_by_name("nigeria").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_) | UpstreamError::Timeout));
    }
}
