//! Conversions from wire types to domain types for currencies.

use super::wire::CurrencyEntry;
use super::{Currency, CurrencyCatalog};
use crate::error::ConverterError;

impl From<CurrencyEntry> for Currency {
    fn from(entry: CurrencyEntry) -> Self {
        Currency::new(entry.code, entry.name)
    }
}

impl From<Vec<CurrencyEntry>> for CurrencyCatalog {
    fn from(entries: Vec<CurrencyEntry>) -> Self {
        CurrencyCatalog::new(entries.into_iter().map(Currency::from).collect())
    }
}

impl CurrencyCatalog {
    /// Decode the backend's JSON currency list.
    pub fn from_json(json: &str) -> Result<Self, ConverterError> {
        let entries: Vec<CurrencyEntry> = serde_json::from_str(json)?;
        Ok(entries.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"code": "USD", "name": "US Dollar"},
            {"code": "ZMW", "name": "Zambian Kwacha"}
        ]"#;
        let catalog = CurrencyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currencies()[1].label(), "Zambian Kwacha (ZMW)");
    }

    #[test]
    fn test_catalog_from_bad_json() {
        let err = CurrencyCatalog::from_json("{\"code\": 1}").unwrap_err();
        assert!(matches!(err, ConverterError::Serde(_)));
    }
}
