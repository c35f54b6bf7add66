use serde::{Deserialize, Serialize};

use countryfx_core::EnrichedCountry;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrencyRequest {
    pub code: String,
    pub amount: f64,
    pub convert_to_code: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub payload: Vec<EnrichedCountry>,
}

#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub conversion: f64,
}
