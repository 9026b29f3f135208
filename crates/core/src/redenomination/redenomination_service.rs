use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::redenomination_model::RedenominationSummary;
use super::redenomination_traits::{RedenominationRepositoryTrait, RedenominationServiceTrait};
use crate::currencies::{canonical_code, validate_code, Currency, CurrencyRepositoryTrait};
use crate::errors::{Error, Result};
use crate::fx;
use crate::users::UserPreferencesRepositoryTrait;

/// Orchestrates bulk re-denomination.
///
/// The service resolves and validates both currencies and rejects the
/// operation up front when either side has no cached rate, so the
/// storage transaction only ever runs with a usable conversion. Records
/// a user deliberately denominated in a third currency are untouched;
/// re-denomination rewrites exactly the records held in `from`.
pub struct RedenominationService {
    repository: Arc<dyn RedenominationRepositoryTrait>,
    currencies: Arc<dyn CurrencyRepositoryTrait>,
    preferences: Arc<dyn UserPreferencesRepositoryTrait>,
}

impl RedenominationService {
    pub fn new(
        repository: Arc<dyn RedenominationRepositoryTrait>,
        currencies: Arc<dyn CurrencyRepositoryTrait>,
        preferences: Arc<dyn UserPreferencesRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            currencies,
            preferences,
        }
    }

    fn resolve_target(&self, code: &str) -> Result<Currency> {
        let code = canonical_code(code);
        validate_code(&code)?;

        let currency = self.currencies.get_by_code(&code)?;
        if !currency.is_active {
            return Err(Error::UnsupportedCurrency(currency.code));
        }
        Ok(currency)
    }

    async fn run(&self, user_id: &str, from: Currency, to: Currency) -> Result<RedenominationSummary> {
        if from.code == to.code {
            return Ok(RedenominationSummary::default());
        }

        // Both rates must be present before any record is touched.
        fx::rate_between(&from, &to)?;

        let summary = self
            .repository
            .redenominate_user(user_id, from.clone(), to.clone())
            .await
            .map_err(|e| Error::RedenominationFailed(e.to_string()))?;

        info!(
            "Re-denominated {} records for user {} from {} to {}",
            summary.total(),
            user_id,
            from.code,
            to.code
        );
        Ok(summary)
    }
}

#[async_trait]
impl RedenominationServiceTrait for RedenominationService {
    async fn change_default_currency(
        &self,
        user_id: &str,
        new_code: &str,
    ) -> Result<RedenominationSummary> {
        let to = self.resolve_target(new_code)?;

        let from_code = match self.preferences.find_preference(user_id)? {
            Some(preference) => preference.default_currency_code,
            None => self.currencies.get_default_currency()?.code,
        };
        let from = self.currencies.get_by_code(&from_code)?;

        self.run(user_id, from, to).await
    }

    async fn redenominate(
        &self,
        user_id: &str,
        from_code: &str,
        to_code: &str,
    ) -> Result<RedenominationSummary> {
        let from = {
            let code = canonical_code(from_code);
            validate_code(&code)?;
            self.currencies.get_by_code(&code)?
        };
        let to = self.resolve_target(to_code)?;

        self.run(user_id, from, to).await
    }
}
