//! Integration tests for the currency catalog repository.

mod common;

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use centime_core::currencies::CurrencyRepositoryTrait;
use centime_core::errors::Error;

#[tokio::test]
async fn test_seeded_catalog_has_exactly_one_default() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let default = repository.get_default_currency().unwrap();
    assert_eq!(default.code, "USD");
    assert_eq!(default.rate_to_base, Decimal::ONE);

    let defaults = repository
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|c| c.is_default)
        .count();
    assert_eq!(defaults, 1);
}

#[tokio::test]
async fn test_default_missing_is_a_configuration_error() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    repository
        .insert(common::new_currency("USD", "US Dollar", "$"))
        .await
        .unwrap();

    let err = repository.get_default_currency().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[tokio::test]
async fn test_get_by_code_not_found_is_surfaced() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let err = repository.get_by_code("XXX").unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_active_is_code_ascending_and_excludes_inactive() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    repository.set_active("GBP", false).await.unwrap();

    let active: Vec<String> = repository
        .list_active()
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(active, vec!["EUR", "JPY", "USD"]);

    // Deactivated currencies stay in the catalog for historical records.
    let all: Vec<String> = repository
        .list_all()
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(all, vec!["EUR", "GBP", "JPY", "USD"]);
}

#[tokio::test]
async fn test_update_rates_applies_partial_batch() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let before = repository.get_by_code("GBP").unwrap();
    let as_of = Utc::now() + Duration::minutes(5);

    let updated = repository
        .update_rates(
            HashMap::from([
                ("EUR".to_string(), dec!(0.95)),
                ("USD".to_string(), dec!(42)),
                // Unknown codes in the batch are ignored, not an error.
                ("XAU".to_string(), dec!(0.0005)),
            ]),
            as_of,
        )
        .await
        .unwrap();

    assert_eq!(updated, 2);

    let eur = repository.get_by_code("EUR").unwrap();
    assert_eq!(eur.rate_to_base, dec!(0.95));
    assert_eq!(eur.last_updated_at, Some(as_of));

    // The base currency's rate is pinned to 1 regardless of the batch,
    // while its refresh clock still advances.
    let usd = repository.get_by_code("USD").unwrap();
    assert_eq!(usd.rate_to_base, Decimal::ONE);
    assert_eq!(usd.last_updated_at, Some(as_of));

    // Currencies absent from the batch are untouched.
    let gbp = repository.get_by_code("GBP").unwrap();
    assert_eq!(gbp.rate_to_base, before.rate_to_base);
    assert_eq!(gbp.last_updated_at, before.last_updated_at);
}

#[tokio::test]
async fn test_rate_and_timestamp_change_together() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let as_of = Utc::now() + Duration::minutes(1);
    repository
        .update_rates(HashMap::from([("EUR".to_string(), dec!(0.99))]), as_of)
        .await
        .unwrap();

    let eur = repository.get_by_code("EUR").unwrap();
    assert_eq!(
        (eur.rate_to_base, eur.last_updated_at),
        (dec!(0.99), Some(as_of))
    );
}

#[tokio::test]
async fn test_set_default_is_an_atomic_toggle() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let eur = repository.set_default_currency("EUR").await.unwrap();

    assert!(eur.is_default);
    assert_eq!(eur.rate_to_base, Decimal::ONE);
    // Rebasing clears the refresh clock so the next tick refetches in
    // the new frame.
    assert_eq!(eur.last_updated_at, None);

    let defaults: Vec<String> = repository
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|c| c.is_default)
        .map(|c| c.code)
        .collect();
    assert_eq!(defaults, vec!["EUR"]);
}

#[tokio::test]
async fn test_set_default_rejects_unknown_and_inactive() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let err = repository.set_default_currency("XXX").await.unwrap_err();
    assert!(err.is_not_found());

    repository.set_active("JPY", false).await.unwrap();
    let err = repository.set_default_currency("JPY").await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedCurrency(code) if code == "JPY"));

    // The failed attempts left the default untouched.
    assert_eq!(repository.get_default_currency().unwrap().code, "USD");
}

#[tokio::test]
async fn test_default_currency_cannot_be_deactivated() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let err = repository.set_active("USD", false).await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(repository.get_by_code("USD").unwrap().is_active);
}

#[tokio::test]
async fn test_duplicate_insert_is_a_unique_violation() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let err = repository
        .insert(common::new_currency("USD", "US Dollar", "$"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(centime_core::errors::DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_inserted_currency_starts_unpriced() {
    let test_db = common::setup().await;
    let repository = common::currency_repository(&test_db).await;
    common::seed_currencies(&repository).await;

    let chf = repository
        .insert(common::new_currency("CHF", "Swiss Franc", "Fr"))
        .await
        .unwrap();

    assert!(!chf.has_rate());
    assert_eq!(chf.last_updated_at, None);
    assert!(!chf.is_default);
}
