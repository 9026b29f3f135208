use crate::earnings::earnings_model::{Earning, NewEarning};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for earning repository operations.
#[async_trait]
pub trait EarningRepositoryTrait: Send + Sync {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Earning>>;
    async fn insert(&self, new_earning: NewEarning) -> Result<Earning>;
    async fn delete(&self, earning_id: &str) -> Result<usize>;
}

/// Trait for earning service operations.
#[async_trait]
pub trait EarningServiceTrait: Send + Sync {
    fn get_earnings(&self, user_id: &str) -> Result<Vec<Earning>>;
    async fn create_earning(&self, new_earning: NewEarning) -> Result<Earning>;
    async fn delete_earning(&self, earning_id: &str) -> Result<usize>;
}
