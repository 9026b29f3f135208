use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn insert(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn delete(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}
