use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use centime_core::errors::{Error, Result, ValidationError};
use centime_core::goals::{Goal, GoalRepositoryTrait, NewGoal};

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::utils::{format_date, now_rfc3339};

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .order_by(goals::id.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Goal::from).collect())
    }

    async fn insert(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn| {
                let currency_code = new_goal.currency_code.clone().ok_or_else(|| {
                    Error::Validation(ValidationError::MissingField("currencyCode".to_string()))
                })?;

                let goal_db = GoalDB {
                    id: new_goal
                        .id
                        .clone()
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: new_goal.user_id.clone(),
                    name: new_goal.name.clone(),
                    target_amount: new_goal.target_amount.to_string(),
                    current_amount: new_goal.current_amount.to_string(),
                    currency_code,
                    due_on: new_goal.due_on.map(format_date),
                    is_achieved: false,
                    created_at: now_rfc3339(),
                };

                diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                goals::table
                    .find(&goal_db.id)
                    .first::<GoalDB>(conn)
                    .map(Goal::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        let goal_id_owned = goal_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(goals::table.find(&goal_id_owned))
                    .execute(conn)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
