//! Currency codes, rate tables, and cross-rate conversion.
//!
//! A [`RateTable`] is an immutable snapshot of exchange rates expressed against
//! a single base currency (the rates provider uses EUR). Conversions between
//! two non-base currencies go through the base as an intermediate.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Upper-cased three-letter currency code (e.g. `EUR`, `SEK`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a user- or upstream-supplied code.
    ///
    /// Surrounding whitespace is ignored and letters are upper-cased; anything
    /// other than exactly three ASCII letters is rejected.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_currency(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CurrencyCode {}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// Exchange rates against a base currency, valid for a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
    as_of: Option<NaiveDate>,
}

impl RateTable {
    /// Build a table, validating every rate.
    ///
    /// The base currency is always present afterwards: if the provider left it
    /// out it is inserted with a rate of `1.0`.
    pub fn new(
        base: CurrencyCode,
        rates: HashMap<CurrencyCode, f64>,
        as_of: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        if let Some((code, rate)) = rates.iter().find(|(_, r)| !r.is_finite() || **r <= 0.0) {
            return Err(DomainError::validation(format!(
                "rate for {code} must be a positive finite number, got {rate}"
            )));
        }

        let mut rates = rates;
        rates.entry(base.clone()).or_insert(1.0);

        Ok(Self { base, rates, as_of })
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Number of currencies priced, the base included.
    pub fn currency_count(&self) -> usize {
        self.rates.len()
    }

    /// Rate of `code` against the base currency.
    pub fn rate(&self, code: &CurrencyCode) -> DomainResult<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| DomainError::invalid_currency(code.as_str()))
    }

    /// Factor that turns one unit of `from` into units of `to`.
    ///
    /// From the base currency the target rate is returned as-is; otherwise the
    /// cross rate `rate(to) / rate(from)` is used.
    pub fn conversion_factor(&self, from: &CurrencyCode, to: &CurrencyCode) -> DomainResult<f64> {
        let to_rate = self.rate(to)?;
        if from == &self.base {
            return Ok(to_rate);
        }

        let from_rate = self.rate(from)?;
        if from == to {
            return Ok(1.0);
        }

        finite(to_rate / from_rate, "cross rate")
    }

    /// Convert `amount` units of `from` into `to`.
    pub fn convert(&self, from: &CurrencyCode, to: &CurrencyCode, amount: f64) -> DomainResult<f64> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        finite(amount * self.conversion_factor(from, to)?, "converted amount")
    }
}

fn finite(value: f64, what: &str) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::validation(format!("{what} is out of range")))
    }
}

impl ValueObject for RateTable {}
