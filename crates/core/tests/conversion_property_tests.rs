//! Property-based tests for the conversion engine.
//!
//! These verify the conversion invariants across randomly generated
//! amounts and rates, using the `proptest` crate.

use centime_core::currencies::Currency;
use centime_core::fx;
use proptest::prelude::*;
use rust_decimal::Decimal;
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

/// Monetary amounts as whole cents, up to one million units.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Rates in a band covering real-world currencies (strong dinars to weak
/// yen-like units). The round-trip-within-a-cent guarantee needs the
/// effective rate to stay above roughly one third; below that a single
/// cent in the target currency is worth more than a cent in the source.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (35i64..=250_000).prop_map(|milli| Decimal::new(milli, 2))
}

proptest! {
    #[test]
    fn identity_conversion_is_exact(cents in any::<i64>(), rate in arb_rate()) {
        let amount = Decimal::new(cents, 4);
        let c = currency("EUR", rate, false);

        prop_assert_eq!(fx::convert(amount, &c, &c).unwrap(), amount);
    }

    #[test]
    fn round_trip_within_one_cent(amount in arb_amount(), rate in arb_rate()) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);

        let there = fx::convert(amount, &base, &other).unwrap();
        let back = fx::convert(there, &other, &base).unwrap();

        prop_assert!((back - amount).abs() <= dec!(0.01),
            "amount {} rate {} came back as {}", amount, rate, back);
    }

    #[test]
    fn converted_amounts_have_two_decimals(amount in arb_amount(), rate in arb_rate()) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);

        let converted = fx::convert(amount, &base, &other).unwrap();
        prop_assert_eq!(converted, converted.round_dp(2));
    }

    #[test]
    fn convert_many_matches_elementwise_convert(
        amounts in proptest::collection::vec(arb_amount(), 0..20),
        rate in arb_rate(),
    ) {
        let base = currency("USD", Decimal::ONE, true);
        let other = currency("EUR", rate, false);

        let batch = fx::convert_many(&amounts, &base, &other).unwrap();
        prop_assert_eq!(batch.len(), amounts.len());

        for (amount, converted) in amounts.iter().zip(&batch) {
            prop_assert_eq!(*converted, fx::convert(*amount, &base, &other).unwrap());
        }
    }
}
