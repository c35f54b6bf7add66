//! `countryfx-core`: domain building blocks for the country/currency service.
//!
//! This crate is **pure domain**: currency codes, rate tables, the converter,
//! and the country record shape. No HTTP, no clocks, no environment.

pub mod country;
pub mod currency;
pub mod error;
pub mod value_object;

pub use country::{Country, CurrencyDescriptor, EnrichedCountry, SekValue};
pub use currency::{CurrencyCode, RateTable};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
