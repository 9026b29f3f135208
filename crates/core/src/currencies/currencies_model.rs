//! Currency domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A currency known to the system, with its cached exchange rate.
///
/// `rate_to_base` is the cached rate relative to the single base currency,
/// in the orientation the provider reports it: units of this currency per
/// one unit of base. The base currency row always carries exactly 1. A
/// zero rate means the currency has never been priced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub rate_to_base: Decimal,
    pub is_default: bool,
    pub is_active: bool,
    /// When the cached rate was last refreshed; `None` until the first
    /// successful refresh.
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Currency {
    /// Whether a usable rate has been cached for this currency.
    pub fn has_rate(&self) -> bool {
        !self.rate_to_base.is_zero()
    }
}

/// Input model for adding a currency to the catalog.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub is_active: bool,
}

/// Normalizes a currency code to the catalog's canonical casing.
pub fn canonical_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Validates that a code looks like an ISO-4217 currency code.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidInput(format!(
            "Invalid currency code: {}",
            code
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_canonical_code() {
        assert_eq!(canonical_code("usd"), "USD");
        assert_eq!(canonical_code(" Eur"), "EUR");
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("USD").is_ok());
        assert!(validate_code("usd").is_ok());
        assert!(validate_code("US").is_err());
        assert!(validate_code("USDT1").is_err());
        assert!(validate_code("U$D").is_err());
    }

    #[test]
    fn test_has_rate() {
        let mut currency = Currency {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
            symbol: "€".to_string(),
            rate_to_base: Decimal::ZERO,
            is_default: false,
            is_active: true,
            last_updated_at: None,
        };
        assert!(!currency.has_rate());

        currency.rate_to_base = dec!(0.92);
        assert!(currency.has_rate());
    }
}
