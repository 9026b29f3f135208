use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::users_model::UserCurrencyPreference;
use super::users_traits::{UserPreferencesRepositoryTrait, UserPreferencesServiceTrait};
use crate::currencies::{canonical_code, validate_code, CurrencyRepositoryTrait};
use crate::errors::{Error, Result};

pub struct UserPreferencesService {
    repository: Arc<dyn UserPreferencesRepositoryTrait>,
    currencies: Arc<dyn CurrencyRepositoryTrait>,
}

impl UserPreferencesService {
    pub fn new(
        repository: Arc<dyn UserPreferencesRepositoryTrait>,
        currencies: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            currencies,
        }
    }

    fn require_active(&self, code: &str) -> Result<String> {
        let code = canonical_code(code);
        validate_code(&code)?;

        let currency = self.currencies.get_by_code(&code)?;
        if !currency.is_active {
            return Err(Error::UnsupportedCurrency(code));
        }
        Ok(currency.code)
    }
}

#[async_trait]
impl UserPreferencesServiceTrait for UserPreferencesService {
    fn get_preference(&self, user_id: &str) -> Result<UserCurrencyPreference> {
        self.repository.get_preference(user_id)
    }

    async fn ensure_preference(&self, user_id: &str) -> Result<UserCurrencyPreference> {
        if let Some(preference) = self.repository.find_preference(user_id)? {
            return Ok(preference);
        }

        let default_currency = self.currencies.get_default_currency()?;
        debug!(
            "Seeding currency preference for user {} with {}",
            user_id, default_currency.code
        );
        self.repository
            .upsert_preference(UserCurrencyPreference::new(user_id, &default_currency.code))
            .await
    }

    async fn set_displayed_currencies(
        &self,
        user_id: &str,
        codes: Vec<String>,
    ) -> Result<UserCurrencyPreference> {
        let mut preference = self.ensure_preference(user_id).await?;

        let mut displayed = Vec::with_capacity(codes.len());
        for code in codes {
            let code = canonical_code(&code);
            validate_code(&code)?;
            self.currencies.get_by_code(&code)?;
            if !displayed.contains(&code) {
                displayed.push(code);
            }
        }

        preference.displayed_currency_codes = displayed;
        self.repository.upsert_preference(preference).await
    }

    fn resolve_record_currency(&self, user_id: &str, requested: Option<String>) -> Result<String> {
        if let Some(code) = requested {
            return self.require_active(&code);
        }

        if let Some(preference) = self.repository.find_preference(user_id)? {
            return Ok(preference.default_currency_code);
        }

        Ok(self.currencies.get_default_currency()?.code)
    }
}
