//! Country records as returned by the country API, plus the SEK enrichment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One currency entry of a country.
///
/// Only `code` is interpreted; every other upstream key is carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Country metadata, mirrored from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,

    #[serde(default)]
    pub currencies: Vec<CurrencyDescriptor>,

    pub population: u64,

    /// Any other field the upstream returned, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Country {
    /// Code of the first listed currency, if the upstream supplied one.
    pub fn primary_currency_code(&self) -> Option<&str> {
        self.currencies.first().and_then(|c| c.code.as_deref())
    }
}

/// Value of one unit of a country's currency in SEK.
///
/// Serialises as a bare number, or as `{ "error": "..." }` when the country's
/// currency has no usable rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SekValue {
    Rate(f64),
    Unavailable { error: String },
}

impl SekValue {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            error: reason.into(),
        }
    }

    pub fn as_rate(&self) -> Option<f64> {
        match self {
            Self::Rate(v) => Some(*v),
            Self::Unavailable { .. } => None,
        }
    }
}

/// A country record with its derived `currencyToSEK` field appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCountry {
    #[serde(flatten)]
    pub country: Country,

    #[serde(rename = "currencyToSEK")]
    pub currency_to_sek: SekValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_fields_survive_round_trip_to_response() {
        let raw = json!({
            "name": "Nigeria",
            "currencies": [{ "code": "NGN", "name": "Nigerian naira", "symbol": "₦" }],
            "population": 186988000u64,
            "alpha2Code": "NG"
        });
        let country: Country = serde_json::from_value(raw).unwrap();
        assert_eq!(country.primary_currency_code(), Some("NGN"));

        let enriched = EnrichedCountry {
            country,
            currency_to_sek: SekValue::Rate(0.0215),
        };
        let out = serde_json::to_value(&enriched).unwrap();

        assert_eq!(out["alpha2Code"], "NG");
        assert_eq!(out["currencies"][0]["symbol"], "₦");
        assert_eq!(out["currencyToSEK"], json!(0.0215));
    }

    #[test]
    fn unavailable_value_is_an_explicit_error_object() {
        let country: Country = serde_json::from_value(json!({
            "name": "Antarctica",
            "currencies": [],
            "population": 1000
        }))
        .unwrap();
        assert_eq!(country.primary_currency_code(), None);

        let enriched = EnrichedCountry {
            country,
            currency_to_sek: SekValue::unavailable("no currency listed"),
        };
        let out = serde_json::to_value(&enriched).unwrap();
        assert_eq!(out["currencyToSEK"], json!({ "error": "no currency listed" }));
    }

    #[test]
    fn missing_population_is_a_schema_error() {
        let res: Result<Country, _> = serde_json::from_value(json!({ "name": "Nowhere" }));
        assert!(res.is_err());
    }
}
