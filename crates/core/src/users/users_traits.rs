use crate::errors::Result;
use crate::users::users_model::UserCurrencyPreference;
use async_trait::async_trait;

/// Trait for user currency preference repository operations.
#[async_trait]
pub trait UserPreferencesRepositoryTrait: Send + Sync {
    fn find_preference(&self, user_id: &str) -> Result<Option<UserCurrencyPreference>>;
    fn get_preference(&self, user_id: &str) -> Result<UserCurrencyPreference>;
    async fn upsert_preference(
        &self,
        preference: UserCurrencyPreference,
    ) -> Result<UserCurrencyPreference>;
}

/// Trait for user currency preference service operations.
#[async_trait]
pub trait UserPreferencesServiceTrait: Send + Sync {
    fn get_preference(&self, user_id: &str) -> Result<UserCurrencyPreference>;

    /// Returns the user's preference, seeding one from the system default
    /// currency on first touch.
    async fn ensure_preference(&self, user_id: &str) -> Result<UserCurrencyPreference>;

    async fn set_displayed_currencies(
        &self,
        user_id: &str,
        codes: Vec<String>,
    ) -> Result<UserCurrencyPreference>;

    /// Resolves the currency a new record should be denominated in:
    /// the explicitly requested code when present (must be active), the
    /// user's default otherwise, the system default as a last resort.
    fn resolve_record_currency(&self, user_id: &str, requested: Option<String>) -> Result<String>;
}
