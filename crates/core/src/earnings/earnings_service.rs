use std::sync::Arc;

use async_trait::async_trait;

use super::earnings_model::{Earning, NewEarning};
use super::earnings_traits::{EarningRepositoryTrait, EarningServiceTrait};
use crate::errors::Result;
use crate::users::UserPreferencesServiceTrait;

pub struct EarningService {
    repository: Arc<dyn EarningRepositoryTrait>,
    preferences: Arc<dyn UserPreferencesServiceTrait>,
}

impl EarningService {
    pub fn new(
        repository: Arc<dyn EarningRepositoryTrait>,
        preferences: Arc<dyn UserPreferencesServiceTrait>,
    ) -> Self {
        Self {
            repository,
            preferences,
        }
    }
}

#[async_trait]
impl EarningServiceTrait for EarningService {
    fn get_earnings(&self, user_id: &str) -> Result<Vec<Earning>> {
        self.repository.load_for_user(user_id)
    }

    async fn create_earning(&self, mut new_earning: NewEarning) -> Result<Earning> {
        let currency_code = self
            .preferences
            .resolve_record_currency(&new_earning.user_id, new_earning.currency_code.take())?;
        new_earning.currency_code = Some(currency_code);

        self.repository.insert(new_earning).await
    }

    async fn delete_earning(&self, earning_id: &str) -> Result<usize> {
        self.repository.delete(earning_id).await
    }
}
