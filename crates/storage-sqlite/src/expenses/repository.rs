use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use centime_core::errors::{Error, Result, ValidationError};
use centime_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};

use super::model::ExpenseDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::utils::{format_date, now_rfc3339};

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .order_by((expenses::spent_on.asc(), expenses::id.asc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn insert(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn| {
                let currency_code = new_expense.currency_code.clone().ok_or_else(|| {
                    Error::Validation(ValidationError::MissingField("currencyCode".to_string()))
                })?;

                let expense_db = ExpenseDB {
                    id: new_expense
                        .id
                        .clone()
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: new_expense.user_id.clone(),
                    name: new_expense.name.clone(),
                    category: new_expense.category.clone(),
                    amount: new_expense.amount.to_string(),
                    currency_code,
                    spent_on: format_date(new_expense.spent_on),
                    notes: new_expense.notes.clone(),
                    created_at: now_rfc3339(),
                };

                diesel::insert_into(expenses::table)
                    .values(&expense_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                expenses::table
                    .find(&expense_db.id)
                    .first::<ExpenseDB>(conn)
                    .map(Expense::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn delete(&self, expense_id: &str) -> Result<usize> {
        let expense_id_owned = expense_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(expenses::table.find(&expense_id_owned))
                    .execute(conn)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
