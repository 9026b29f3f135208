use std::sync::Arc;

use async_trait::async_trait;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;
use crate::users::UserPreferencesServiceTrait;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    preferences: Arc<dyn UserPreferencesServiceTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        preferences: Arc<dyn UserPreferencesServiceTrait>,
    ) -> Self {
        Self {
            repository,
            preferences,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.load_for_user(user_id)
    }

    async fn create_expense(&self, mut new_expense: NewExpense) -> Result<Expense> {
        let currency_code = self
            .preferences
            .resolve_record_currency(&new_expense.user_id, new_expense.currency_code.take())?;
        new_expense.currency_code = Some(currency_code);

        self.repository.insert(new_expense).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        self.repository.delete(expense_id).await
    }
}
