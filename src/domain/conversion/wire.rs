//! Wire types for conversion replies.

use serde::{Deserialize, Serialize};

/// Historical point as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRateResponse {
    pub date: String,
    pub rate: f64,
}

/// Reply to a `convert_currency` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    #[serde(default)]
    pub historical_data: Vec<HistoricalRateResponse>,
}
