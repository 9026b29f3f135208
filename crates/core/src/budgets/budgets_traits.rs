use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn insert(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn delete(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}
