use crate::currencies::currencies_model::{Currency, NewCurrency};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Trait defining the contract for currency repository operations.
///
/// Reads are synchronous pool lookups; writes go through the storage
/// layer's serialized writer and are therefore async.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    /// Returns the single base currency. Fails with
    /// `Error::Configuration` when zero or more than one row is flagged
    /// as default.
    fn get_default_currency(&self) -> Result<Currency>;

    fn get_by_code(&self, code: &str) -> Result<Currency>;

    /// Active currencies, code ascending.
    fn list_active(&self) -> Result<Vec<Currency>>;

    fn list_all(&self) -> Result<Vec<Currency>>;

    /// Applies a rate batch in one transaction. Currencies absent from
    /// the mapping are untouched; mapping codes unknown to the catalog
    /// are ignored. The default currency's rate is pinned to 1 while its
    /// `last_updated_at` still advances to `as_of`. Returns the number of
    /// rows updated.
    async fn update_rates(
        &self,
        rates: HashMap<String, Decimal>,
        as_of: DateTime<Utc>,
    ) -> Result<usize>;

    /// Atomically moves the default flag to `code`. Never leaves the
    /// catalog with two defaults, even transiently.
    async fn set_default_currency(&self, code: &str) -> Result<Currency>;

    async fn insert(&self, new_currency: NewCurrency) -> Result<Currency>;

    /// Currencies are never deleted; deactivation excludes them from new
    /// assignment while historical records keep referencing them.
    async fn set_active(&self, code: &str, active: bool) -> Result<Currency>;
}

/// Trait defining the contract for currency service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    fn get_default_currency(&self) -> Result<Currency>;
    fn get_by_code(&self, code: &str) -> Result<Currency>;
    fn list_active(&self) -> Result<Vec<Currency>>;
    fn list_all(&self) -> Result<Vec<Currency>>;
    async fn update_rates(
        &self,
        rates: HashMap<String, Decimal>,
        as_of: DateTime<Utc>,
    ) -> Result<usize>;
    async fn set_default_currency(&self, code: &str) -> Result<Currency>;
    async fn add_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
    async fn set_active(&self, code: &str, active: bool) -> Result<Currency>;
    /// Deployment-time seeding; idempotent. The first entry becomes the
    /// base currency when the catalog has no default yet.
    async fn seed_currencies(&self, currencies: Vec<NewCurrency>) -> Result<usize>;
}
