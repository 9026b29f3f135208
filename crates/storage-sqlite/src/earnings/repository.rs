use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use centime_core::earnings::{Earning, EarningRepositoryTrait, NewEarning};
use centime_core::errors::{Error, Result, ValidationError};

use super::model::EarningDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::earnings;
use crate::utils::{format_date, now_rfc3339};

pub struct EarningRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EarningRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl EarningRepositoryTrait for EarningRepository {
    fn load_for_user(&self, user_id: &str) -> Result<Vec<Earning>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = earnings::table
            .filter(earnings::user_id.eq(user_id))
            .order_by((earnings::received_on.asc(), earnings::id.asc()))
            .load::<EarningDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Earning::from).collect())
    }

    async fn insert(&self, new_earning: NewEarning) -> Result<Earning> {
        self.writer
            .exec(move |conn| {
                let currency_code = new_earning.currency_code.clone().ok_or_else(|| {
                    Error::Validation(ValidationError::MissingField("currencyCode".to_string()))
                })?;

                let earning_db = EarningDB {
                    id: new_earning
                        .id
                        .clone()
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: new_earning.user_id.clone(),
                    name: new_earning.name.clone(),
                    amount: new_earning.amount.to_string(),
                    currency_code,
                    received_on: format_date(new_earning.received_on),
                    notes: new_earning.notes.clone(),
                    created_at: now_rfc3339(),
                };

                diesel::insert_into(earnings::table)
                    .values(&earning_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                earnings::table
                    .find(&earning_db.id)
                    .first::<EarningDB>(conn)
                    .map(Earning::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn delete(&self, earning_id: &str) -> Result<usize> {
        let earning_id_owned = earning_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(earnings::table.find(&earning_id_owned))
                    .execute(conn)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
