use std::sync::Arc;

use async_trait::async_trait;

use super::budgets_model::{Budget, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::users::UserPreferencesServiceTrait;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    preferences: Arc<dyn UserPreferencesServiceTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        preferences: Arc<dyn UserPreferencesServiceTrait>,
    ) -> Self {
        Self {
            repository,
            preferences,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.load_for_user(user_id)
    }

    async fn create_budget(&self, mut new_budget: NewBudget) -> Result<Budget> {
        if new_budget.period_end < new_budget.period_start {
            return Err(ValidationError::InvalidInput(
                "Budget period ends before it starts".to_string(),
            )
            .into());
        }

        let currency_code = self
            .preferences
            .resolve_record_currency(&new_budget.user_id, new_budget.currency_code.take())?;
        new_budget.currency_code = Some(currency_code);

        self.repository.insert(new_budget).await
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        self.repository.delete(budget_id).await
    }
}
