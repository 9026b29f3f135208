use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use centime_core::currencies::{Currency, CurrencyRepositoryTrait, NewCurrency};
use centime_core::errors::{DatabaseError, Error, Result};

use super::model::CurrencyDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::currencies;
use crate::utils::to_rfc3339;

#[derive(Clone)]
pub struct CurrencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Loads the single default row on the given connection; used both by
/// reads and inside write transactions.
fn load_default(conn: &mut SqliteConnection) -> Result<CurrencyDB> {
    let defaults = currencies::table
        .filter(currencies::is_default.eq(true))
        .load::<CurrencyDB>(conn)
        .map_err(StorageError::from)?;

    match defaults.len() {
        1 => Ok(defaults.into_iter().next().unwrap()),
        0 => Err(Error::Configuration(
            "No default currency configured".to_string(),
        )),
        n => Err(Error::Configuration(format!(
            "{} currencies are flagged as default",
            n
        ))),
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    fn get_default_currency(&self) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;
        load_default(&mut conn).map(Currency::from)
    }

    fn get_by_code(&self, code: &str) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;

        let currency_db = currencies::table
            .find(code)
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        currency_db.map(Currency::from).ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "Currency {} not found",
                code
            )))
        })
    }

    fn list_active(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = currencies::table
            .filter(currencies::is_active.eq(true))
            .order_by(currencies::code.asc())
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Currency::from).collect())
    }

    fn list_all(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = currencies::table
            .order_by(currencies::code.asc())
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Currency::from).collect())
    }

    async fn update_rates(
        &self,
        rates: HashMap<String, Decimal>,
        as_of: DateTime<Utc>,
    ) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                let default_code = load_default(conn)?.code;
                let as_of_str = to_rfc3339(as_of);
                let mut updated = 0;

                for (code, rate) in rates {
                    // The base currency's rate is pinned to 1; its
                    // timestamp still advances, it is the due-check clock.
                    let rate = if code == default_code {
                        Decimal::ONE
                    } else {
                        rate
                    };

                    updated += diesel::update(currencies::table.find(&code))
                        .set((
                            currencies::rate_to_base.eq(rate.to_string()),
                            currencies::last_updated_at.eq(Some(as_of_str.clone())),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                Ok(updated)
            })
            .await
    }

    async fn set_default_currency(&self, code: &str) -> Result<Currency> {
        let code_owned = code.to_string();
        self.writer
            .exec(move |conn| {
                let target = currencies::table
                    .find(&code_owned)
                    .first::<CurrencyDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "Currency {} not found",
                            code_owned
                        )))
                    })?;

                if !target.is_active {
                    return Err(Error::UnsupportedCurrency(target.code));
                }

                // Single statement, so no reader can ever observe two
                // defaults (or none) mid-toggle.
                sql_query("UPDATE currencies SET is_default = (code = ?)")
                    .bind::<Text, _>(&code_owned)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // The new base is worth exactly 1 of itself; clearing its
                // refresh clock marks every other rate as stale in the new
                // frame until the next refresh rewrites them.
                diesel::update(currencies::table.find(&code_owned))
                    .set((
                        currencies::rate_to_base.eq(Decimal::ONE.to_string()),
                        currencies::last_updated_at.eq(None::<String>),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                currencies::table
                    .find(&code_owned)
                    .first::<CurrencyDB>(conn)
                    .map(Currency::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn insert(&self, new_currency: NewCurrency) -> Result<Currency> {
        self.writer
            .exec(move |conn| {
                let currency_db = CurrencyDB::from(new_currency);

                diesel::insert_into(currencies::table)
                    .values(&currency_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                currencies::table
                    .find(&currency_db.code)
                    .first::<CurrencyDB>(conn)
                    .map(Currency::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    async fn set_active(&self, code: &str, active: bool) -> Result<Currency> {
        let code_owned = code.to_string();
        self.writer
            .exec(move |conn| {
                let target = currencies::table
                    .find(&code_owned)
                    .first::<CurrencyDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "Currency {} not found",
                            code_owned
                        )))
                    })?;

                if target.is_default && !active {
                    return Err(Error::Configuration(
                        "The default currency cannot be deactivated".to_string(),
                    ));
                }

                diesel::update(currencies::table.find(&code_owned))
                    .set(currencies::is_active.eq(active))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                currencies::table
                    .find(&code_owned)
                    .first::<CurrencyDB>(conn)
                    .map(Currency::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
