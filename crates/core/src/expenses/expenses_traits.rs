use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Expense>>;
    async fn insert(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn delete(&self, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: &str) -> Result<usize>;
}
