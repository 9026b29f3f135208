//! Wire-agnostic models returned by rate providers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of exchange rates relative to one base currency.
///
/// Keys are canonical uppercase ISO codes; values are units of that
/// currency per one unit of `base`. The base currency itself is always
/// present with a rate of exactly 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub base: String,
    pub as_of: DateTime<Utc>,
    pub rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Looks up the rate for a code in canonical casing.
    pub fn rate_for(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&canonical_code(code)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Normalizes a currency code to the store's canonical casing.
///
/// The wire format keys rates by lowercase ISO codes; everything internal
/// uses uppercase.
pub fn canonical_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
