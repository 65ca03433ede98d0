//! Currency domain — the fixed catalog of selectable currencies.

mod convert;
pub mod wire;

use crate::shared::CurrencyCode;
use serde::{Deserialize, Serialize};

/// A selectable currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub name: String,
}

impl Currency {
    pub fn new(code: impl Into<CurrencyCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Option label as shown in the selectors, e.g. `"Euro (EUR)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Ordered catalog obtained from the conversion service at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    pub fn new(currencies: Vec<Currency>) -> Self {
        let mut catalog = Self::default();
        for currency in currencies {
            if currency.code.is_empty() || catalog.contains(&currency.code) {
                continue;
            }
            catalog.currencies.push(currency);
        }
        catalog
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.currencies.iter().find(|c| &c.code == code)
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.get(code).is_some()
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.currencies.iter().map(|c| &c.code)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let c = Currency::new("ZMW", "Zambian Kwacha");
        assert_eq!(c.label(), "Zambian Kwacha (ZMW)");
    }

    #[test]
    fn test_catalog_keeps_order_and_drops_duplicates() {
        let catalog = CurrencyCatalog::new(vec![
            Currency::new("USD", "US Dollar"),
            Currency::new("EUR", "Euro"),
            Currency::new("usd", "Duplicate Dollar"),
            Currency::new("", "Nameless"),
        ]);
        let codes: Vec<&str> = catalog.codes().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["USD", "EUR"]);
        assert_eq!(catalog.get(&"USD".into()).unwrap().name, "US Dollar");
    }

    #[test]
    fn test_catalog_lookup_is_case_insensitive_through_code() {
        let catalog = CurrencyCatalog::new(vec![Currency::new("GBP", "British Pound")]);
        assert!(catalog.contains(&CurrencyCode::from("gbp")));
        assert!(!catalog.contains(&CurrencyCode::from("JPY")));
    }
}
