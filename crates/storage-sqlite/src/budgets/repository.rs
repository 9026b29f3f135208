use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use centime_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use centime_core::errors::{Error, Result, ValidationError};

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use crate::utils::{format_date, now_rfc3339};

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order_by((budgets::period_start.asc(), budgets::id.asc()))
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Budget::from).collect())
    }

    async fn insert(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn| {
                let currency_code = new_budget.currency_code.clone().ok_or_else(|| {
                    Error::Validation(ValidationError::MissingField("currencyCode".to_string()))
                })?;

                let budget_db = BudgetDB {
                    id: new_budget
                        .id
                        .clone()
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: new_budget.user_id.clone(),
                    name: new_budget.name.clone(),
                    amount: new_budget.amount.to_string(),
                    currency_code,
                    period_start: format_date(new_budget.period_start),
                    period_end: format_date(new_budget.period_end),
                    created_at: now_rfc3339(),
                };

                diesel::insert_into(budgets::table)
                    .values(&budget_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                budgets::table
                    .find(&budget_db.id)
                    .first::<BudgetDB>(conn)
                    .map(Budget::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn delete(&self, budget_id: &str) -> Result<usize> {
        let budget_id_owned = budget_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(budgets::table.find(&budget_id_owned))
                    .execute(conn)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
