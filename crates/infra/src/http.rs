//! Shared request plumbing for the upstream clients.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::UpstreamError;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("countryfx/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Append path segments to `base`, percent-encoding each one.
///
/// A trailing slash on the base is ignored, so `https://host/v2/` and
/// `https://host/v2` behave the same.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Issue a GET and decode a JSON body of type `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, UpstreamError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { status: status.as_u16() });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| UpstreamError::schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_after_base_path() {
        let base = Url::parse("https://restcountries.example/v2/").unwrap();
        let url = endpoint(&base, &["name", "nigeria"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.example/v2/name/nigeria");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let base = Url::parse("https://restcountries.example/v2").unwrap();
        let url = endpoint(&base, &["name", "united states/../x"]).unwrap();
        assert_eq!(url.path(), "/v2/name/united%20states%2F..%2Fx");
    }

    #[test]
    fn endpoint_rejects_non_base_urls() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(matches!(endpoint(&base, &["latest"]), Err(UpstreamError::InvalidUrl(_))));
    }
}
