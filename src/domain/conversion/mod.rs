//! Conversion domain — requests, results and the historical rate series.

mod convert;
pub mod state;
pub mod wire;

use crate::error::InputValidationError;
use crate::shared::CurrencyCode;
use serde::{Deserialize, Serialize};

pub use state::ViewState;

/// Parse the raw amount field.
///
/// The text is trimmed and parsed strictly as `f64`; the value must be finite
/// and strictly positive.
pub fn parse_amount(raw: &str) -> Result<f64, InputValidationError> {
    let trimmed = raw.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| InputValidationError::InvalidAmount(trimmed.to_string()))?;
    if !amount.is_finite() {
        return Err(InputValidationError::InvalidAmount(trimmed.to_string()));
    }
    if amount <= 0.0 {
        return Err(InputValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// A validated conversion request. Only constructible with a positive finite
/// amount and two selected currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(
        amount: f64,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Self, InputValidationError> {
        if from.is_empty() || to.is_empty() {
            return Err(InputValidationError::MissingCurrency);
        }
        if !amount.is_finite() {
            return Err(InputValidationError::InvalidAmount(amount.to_string()));
        }
        if amount <= 0.0 {
            return Err(InputValidationError::NonPositiveAmount(amount));
        }
        Ok(Self { amount, from, to })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn from(&self) -> &CurrencyCode {
        &self.from
    }

    pub fn to(&self) -> &CurrencyCode {
        &self.to
    }
}

/// One point of the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRate {
    /// Date label as sent by the backend, e.g. `"2023-05-01"`.
    pub date: String,
    pub rate: f64,
}

/// A successful conversion: the converted amount plus the rate history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Rate-adjusted amount.
    pub result: f64,
    pub historical_data: Vec<HistoricalRate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive() {
        assert_eq!(parse_amount("10"), Ok(10.0));
        assert_eq!(parse_amount(" 2.5 "), Ok(2.5));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["", "abc", "10abc", "1,000", "NaN", "inf", "-inf"] {
            assert!(
                matches!(parse_amount(raw), Err(InputValidationError::InvalidAmount(_))),
                "{raw:?} should be rejected as not a number"
            );
        }
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert_eq!(
            parse_amount("0"),
            Err(InputValidationError::NonPositiveAmount(0.0))
        );
        assert_eq!(
            parse_amount("-3"),
            Err(InputValidationError::NonPositiveAmount(-3.0))
        );
    }

    #[test]
    fn test_request_requires_both_currencies() {
        let err = ConversionRequest::new(1.0, "USD".into(), "".into()).unwrap_err();
        assert_eq!(err, InputValidationError::MissingCurrency);
    }

    #[test]
    fn test_request_rejects_non_finite_amount() {
        assert!(ConversionRequest::new(f64::NAN, "USD".into(), "EUR".into()).is_err());
        assert!(ConversionRequest::new(0.0, "USD".into(), "EUR".into()).is_err());
        let ok = ConversionRequest::new(3.0, "USD".into(), "EUR".into()).unwrap();
        assert_eq!(ok.amount(), 3.0);
        assert_eq!(ok.to().as_str(), "EUR");
    }
}
