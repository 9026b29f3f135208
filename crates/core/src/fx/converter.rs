//! Pure conversion functions over cached currency rates.
//!
//! All rates are stored relative to one base currency, so any-to-any
//! conversion is a division plus a multiplication (from -> base -> to)
//! rather than a full rate matrix. The functions only read the currency
//! snapshots they are handed; they are safe to call concurrently from any
//! number of readers.

use rust_decimal::{Decimal, RoundingStrategy};

use super::fx_errors::FxError;
use crate::constants::AMOUNT_DECIMAL_PRECISION;
use crate::currencies::Currency;

/// Rounds a monetary amount to the domain's 2-decimal storage precision,
/// half-up.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// The unrounded multiplier converting amounts in `from` into `to`.
///
/// Callers chaining conversions should multiply with this and round only
/// at the final output boundary.
pub fn rate_between(from: &Currency, to: &Currency) -> Result<Decimal, FxError> {
    if from.code == to.code {
        return Ok(Decimal::ONE);
    }
    if !from.has_rate() {
        return Err(FxError::MissingRate(from.code.clone()));
    }
    if !to.has_rate() {
        return Err(FxError::MissingRate(to.code.clone()));
    }

    Ok(to.rate_to_base / from.rate_to_base)
}

/// Converts `amount` from one currency to another using the cached rates.
///
/// Same-currency conversions return the amount unchanged, bit for bit, so
/// no-op conversions never introduce rounding noise. Everything else is
/// rounded to 2 decimal places half-up.
pub fn convert(amount: Decimal, from: &Currency, to: &Currency) -> Result<Decimal, FxError> {
    if from.code == to.code {
        return Ok(amount);
    }

    let rate = rate_between(from, to)?;
    Ok(round_amount(amount * rate))
}

/// Converts a batch of amounts with a single rate lookup.
pub fn convert_many(
    amounts: &[Decimal],
    from: &Currency,
    to: &Currency,
) -> Result<Vec<Decimal>, FxError> {
    if from.code == to.code {
        return Ok(amounts.to_vec());
    }

    let rate = rate_between(from, to)?;
    Ok(amounts
        .iter()
        .map(|amount| round_amount(*amount * rate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn currency(code: &str, rate: Decimal, is_default: bool) -> Currency {
        Currency {
            code: code.to_string(),
            name: code.to_string(),
            symbol: code.to_string(),
            rate_to_base: rate,
            is_default,
            is_active: true,
            last_updated_at: None,
        }
    }

    fn usd() -> Currency {
        currency("USD", Decimal::ONE, true)
    }

    fn eur() -> Currency {
        currency("EUR", dec!(0.92), false)
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        let eur = eur();
        assert_eq!(convert(dec!(50), &eur, &eur).unwrap(), dec!(50));
        assert_eq!(convert(dec!(50.005), &eur, &eur).unwrap(), dec!(50.005));
    }

    #[test]
    fn test_usd_to_eur_scenario() {
        assert_eq!(convert(dec!(100), &usd(), &eur()).unwrap(), dec!(92.00));
    }

    #[test]
    fn test_eur_to_usd_scenario() {
        assert_eq!(convert(dec!(92), &eur(), &usd()).unwrap(), dec!(100.00));
    }

    #[test]
    fn test_cross_rate_via_base() {
        let gbp = currency("GBP", dec!(0.80), false);
        // 100 EUR -> base -> GBP: 100 / 0.92 * 0.80
        assert_eq!(convert(dec!(100), &eur(), &gbp).unwrap(), dec!(86.96));
    }

    #[test]
    fn test_rounding_is_half_up() {
        let halves = currency("HLV", dec!(0.5), false);
        // 4.01 USD * 0.5 = 2.005 -> 2.01
        assert_eq!(convert(dec!(4.01), &usd(), &halves).unwrap(), dec!(2.01));
    }

    #[test]
    fn test_round_trip_within_one_cent() {
        let a = dec!(123.45);
        let there = convert(a, &usd(), &eur()).unwrap();
        let back = convert(there, &eur(), &usd()).unwrap();
        assert!((back - a).abs() <= dec!(0.01));
    }

    #[test]
    fn test_missing_rate_is_an_error() {
        let unpriced = currency("XXX", Decimal::ZERO, false);

        let err = convert(dec!(10), &usd(), &unpriced).unwrap_err();
        assert!(matches!(err, FxError::MissingRate(code) if code == "XXX"));

        let err = convert(dec!(10), &unpriced, &usd()).unwrap_err();
        assert!(matches!(err, FxError::MissingRate(code) if code == "XXX"));
    }

    #[test]
    fn test_convert_many_matches_convert() {
        let amounts = vec![dec!(1), dec!(2.50), dec!(100)];
        let batch = convert_many(&amounts, &usd(), &eur()).unwrap();

        for (amount, converted) in amounts.iter().zip(&batch) {
            assert_eq!(*converted, convert(*amount, &usd(), &eur()).unwrap());
        }
    }

    #[test]
    fn test_convert_many_identity_untouched() {
        let amounts = vec![dec!(1.005), dec!(2)];
        assert_eq!(convert_many(&amounts, &usd(), &usd()).unwrap(), amounts);
    }
}
