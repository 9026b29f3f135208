use std::sync::Arc;

use async_trait::async_trait;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::users::UserPreferencesServiceTrait;

pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    preferences: Arc<dyn UserPreferencesServiceTrait>,
}

impl GoalService {
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        preferences: Arc<dyn UserPreferencesServiceTrait>,
    ) -> Self {
        Self {
            repository,
            preferences,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.repository.load_for_user(user_id)
    }

    async fn create_goal(&self, mut new_goal: NewGoal) -> Result<Goal> {
        let currency_code = self
            .preferences
            .resolve_record_currency(&new_goal.user_id, new_goal.currency_code.take())?;
        new_goal.currency_code = Some(currency_code);

        self.repository.insert(new_goal).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.repository.delete(goal_id).await
    }
}
