//! Infrastructure layer: clients for the external country and rates APIs.

pub mod countries;
pub mod error;
mod http;
pub mod rates;

pub use countries::{CountrySource, RestCountriesClient};
pub use error::UpstreamError;
pub use rates::{FixerClient, RateSource};
