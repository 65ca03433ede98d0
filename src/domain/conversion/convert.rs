//! Conversions from wire types to domain types for conversions.

use super::wire::{ConversionResponse, HistoricalRateResponse};
use super::{ConversionResult, HistoricalRate};
use crate::error::ConverterError;
use crate::shared::CurrencyCode;

impl From<HistoricalRateResponse> for HistoricalRate {
    fn from(h: HistoricalRateResponse) -> Self {
        Self {
            date: h.date,
            rate: h.rate,
        }
    }
}

impl From<ConversionResponse> for ConversionResult {
    fn from(r: ConversionResponse) -> Self {
        Self {
            amount: r.amount,
            from: CurrencyCode::new(r.from),
            to: CurrencyCode::new(r.to),
            result: r.result,
            historical_data: r
                .historical_data
                .into_iter()
                .filter(|h| h.rate.is_finite())
                .map(HistoricalRate::from)
                .collect(),
        }
    }
}

impl ConversionResult {
    /// Decode the backend's JSON conversion reply.
    pub fn from_json(json: &str) -> Result<Self, ConverterError> {
        let response: ConversionResponse = serde_json::from_str(json)?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> ConversionResponse {
        ConversionResponse {
            amount: 10.0,
            from: "usd".to_string(),
            to: "EUR".to_string(),
            result: 9.12,
            historical_data: vec![
                HistoricalRateResponse {
                    date: "2023-05-01".to_string(),
                    rate: 0.84,
                },
                HistoricalRateResponse {
                    date: "2023-05-02".to_string(),
                    rate: f64::NAN,
                },
                HistoricalRateResponse {
                    date: "2023-05-03".to_string(),
                    rate: 0.86,
                },
            ],
        }
    }

    #[test]
    fn test_conversion_response_conversion() {
        let result: ConversionResult = sample_response().into();
        assert_eq!(result.from.as_str(), "USD");
        assert_eq!(result.to.as_str(), "EUR");
        assert_eq!(result.result, 9.12);
        let dates: Vec<&str> = result.historical_data.iter().map(|h| h.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-05-01", "2023-05-03"]);
    }

    #[test]
    fn test_from_json_defaults_missing_history() {
        let json = r#"{"amount": 1.0, "from": "USD", "to": "ZMW", "result": 25.84}"#;
        let result = ConversionResult::from_json(json).unwrap();
        assert_eq!(result.result, 25.84);
        assert!(result.historical_data.is_empty());
    }

    #[test]
    fn test_from_json_full_reply() {
        let json = r#"{
            "amount": 2.0, "from": "EUR", "to": "GBP", "result": 1.76,
            "historical_data": [{"date": "2023-05-01", "rate": 0.88}]
        }"#;
        let result = ConversionResult::from_json(json).unwrap();
        assert_eq!(result.historical_data.len(), 1);
        assert_eq!(result.historical_data[0].rate, 0.88);
    }
}
