use crate::currencies::Currency;
use crate::errors::Result;
use crate::redenomination::redenomination_model::RedenominationSummary;
use async_trait::async_trait;

/// Trait for the storage side of bulk re-denomination.
#[async_trait]
pub trait RedenominationRepositoryTrait: Send + Sync {
    /// Rewrites every record the user owns that is denominated in `from`
    /// into `to` (amounts converted, currency reference switched) and
    /// moves the user's default currency to `to`, all inside a single
    /// transaction. A failure on any record rolls back the entire batch,
    /// including the preference switch.
    async fn redenominate_user(
        &self,
        user_id: &str,
        from: Currency,
        to: Currency,
    ) -> Result<RedenominationSummary>;
}

/// Trait for re-denomination service operations.
#[async_trait]
pub trait RedenominationServiceTrait: Send + Sync {
    /// Entry point for the settings flow: the user picked a new default
    /// currency. Validates the target, then rewrites the user's records
    /// from their current default into it.
    async fn change_default_currency(
        &self,
        user_id: &str,
        new_code: &str,
    ) -> Result<RedenominationSummary>;

    /// Explicit re-denomination between two named currencies.
    async fn redenominate(
        &self,
        user_id: &str,
        from_code: &str,
        to_code: &str,
    ) -> Result<RedenominationSummary>;
}
