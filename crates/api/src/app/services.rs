//! Service wiring: the country/currency orchestration behind the HTTP routes.

use std::sync::Arc;

use thiserror::Error;

use countryfx_auth::TokenIssuer;
use countryfx_core::{Country, CurrencyCode, DomainError, EnrichedCountry, RateTable, SekValue};
use countryfx_infra::{CountrySource, RateSource, UpstreamError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Everything the handlers need, shared behind an `Arc`.
pub struct AppServices {
    pub country: CountryService,
    pub tokens: Arc<dyn TokenIssuer>,
}

/// Combines country metadata with exchange rates.
///
/// Holds no state between requests: every call fetches a fresh rate table.
pub struct CountryService {
    countries: Arc<dyn CountrySource>,
    rates: Arc<dyn RateSource>,
    target: CurrencyCode,
}

impl CountryService {
    pub fn new(countries: Arc<dyn CountrySource>, rates: Arc<dyn RateSource>, target: CurrencyCode) -> Self {
        Self {
            countries,
            rates,
            target,
        }
    }

    /// Look up countries by name and value each one's currency in the target currency.
    ///
    /// Both upstream calls run concurrently; if either fails the whole lookup
    /// fails and the other result is dropped.
    pub async fn get_country(&self, name: &str) -> Result<Vec<EnrichedCountry>, ServiceError> {
        let (countries, table) = tokio::try_join!(
            self.countries.countries_by_name(name),
            self.rates.latest_rates()
        )?;

        Ok(countries
            .into_iter()
            .map(|country| {
                let currency_to_sek = self.target_value(&country, &table);
                EnrichedCountry {
                    country,
                    currency_to_sek,
                }
            })
            .collect())
    }

    /// Convert `amount` of `code` into `convert_to`, at current rates.
    pub async fn convert_currency(
        &self,
        code: &CurrencyCode,
        amount: f64,
        convert_to: &CurrencyCode,
    ) -> Result<f64, ServiceError> {
        let table = self.rates.latest_rates().await?;
        Ok(table.convert(code, convert_to, amount)?)
    }

    fn target_value(&self, country: &Country, table: &RateTable) -> SekValue {
        let Some(raw) = country.primary_currency_code() else {
            return SekValue::unavailable("no currency listed");
        };

        let value = CurrencyCode::parse(raw).and_then(|code| {
            if &code == table.base() {
                table.rate(&self.target)
            } else {
                table.conversion_factor(&code, &self.target)
            }
        });

        match value {
            Ok(v) => SekValue::Rate(v),
            Err(e) => {
                tracing::debug!(country = %country.name, error = %e, "currency has no usable rate");
                SekValue::unavailable(e.to_string())
            }
        }
    }
}
