//! Wire types for the currency catalog.

use serde::{Deserialize, Serialize};

/// One entry of the backend's currency list: `{"code": "USD", "name": "US Dollar"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub code: String,
    pub name: String,
}
