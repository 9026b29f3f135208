use crate::errors::RatesError;
use crate::models::RateTable;
use async_trait::async_trait;
use std::collections::HashMap;

/// Contract for fetching exchange rates from an external provider.
///
/// Implementations perform the network call and nothing else; committing
/// the result to the currency store is the caller's job.
#[async_trait]
pub trait RateProviderTrait: Send + Sync {
    /// Fetches the current rates for every currency the provider knows,
    /// expressed relative to `base`.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, RatesError>;

    /// Fetches the provider's currency catalog as code -> display name.
    ///
    /// Used to populate the "add new currency" flow; shares the error
    /// taxonomy of [`fetch_rates`](Self::fetch_rates).
    async fn list_currencies(&self) -> Result<HashMap<String, String>, RatesError>;
}
