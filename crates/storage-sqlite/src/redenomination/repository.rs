//! Bulk re-denomination as a single write transaction.
//!
//! The whole rewrite - earnings, expenses, budgets, goals, and the user's
//! default-currency switch - runs as one job on the writer actor, i.e.
//! inside one immediate transaction. A failure on any record (including a
//! stored amount that does not parse) rolls back everything the call
//! touched; no partial effects are observable afterwards.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use centime_core::currencies::Currency;
use centime_core::errors::{Error, Result, ValidationError};
use centime_core::fx;
use centime_core::redenomination::{RedenominationRepositoryTrait, RedenominationSummary};
use centime_core::users::UserCurrencyPreference;

use crate::db::{DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budgets, earnings, expenses, goals, user_currency_preferences};
use crate::users::UserCurrencyPreferenceDB;

pub struct RedenominationRepository {
    #[allow(dead_code)]
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RedenominationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Strict amount parsing: the rewrite refuses to touch a user whose
/// stored amounts are corrupt, instead of rewriting them to zero.
fn parse_amount(kind: &str, record_id: &str, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} {} has unparseable amount '{}': {}",
            kind, record_id, raw, e
        )))
    })
}

fn rewrite_earnings(
    conn: &mut SqliteConnection,
    user_id: &str,
    from: &Currency,
    to: &Currency,
) -> Result<usize> {
    let rows: Vec<(String, String)> = earnings::table
        .filter(earnings::user_id.eq(user_id))
        .filter(earnings::currency_code.eq(&from.code))
        .select((earnings::id, earnings::amount))
        .order_by(earnings::id.asc())
        .load(conn)
        .map_err(StorageError::from)?;

    let mut rewritten = 0;
    for (record_id, amount_raw) in rows {
        let amount = parse_amount("earning", &record_id, &amount_raw)?;
        let converted = fx::convert(amount, from, to).map_err(Error::from)?;

        diesel::update(earnings::table.find(&record_id))
            .set((
                earnings::amount.eq(converted.to_string()),
                earnings::currency_code.eq(&to.code),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;
        rewritten += 1;
    }
    Ok(rewritten)
}

fn rewrite_expenses(
    conn: &mut SqliteConnection,
    user_id: &str,
    from: &Currency,
    to: &Currency,
) -> Result<usize> {
    let rows: Vec<(String, String)> = expenses::table
        .filter(expenses::user_id.eq(user_id))
        .filter(expenses::currency_code.eq(&from.code))
        .select((expenses::id, expenses::amount))
        .order_by(expenses::id.asc())
        .load(conn)
        .map_err(StorageError::from)?;

    let mut rewritten = 0;
    for (record_id, amount_raw) in rows {
        let amount = parse_amount("expense", &record_id, &amount_raw)?;
        let converted = fx::convert(amount, from, to).map_err(Error::from)?;

        diesel::update(expenses::table.find(&record_id))
            .set((
                expenses::amount.eq(converted.to_string()),
                expenses::currency_code.eq(&to.code),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;
        rewritten += 1;
    }
    Ok(rewritten)
}

fn rewrite_budgets(
    conn: &mut SqliteConnection,
    user_id: &str,
    from: &Currency,
    to: &Currency,
) -> Result<usize> {
    let rows: Vec<(String, String)> = budgets::table
        .filter(budgets::user_id.eq(user_id))
        .filter(budgets::currency_code.eq(&from.code))
        .select((budgets::id, budgets::amount))
        .order_by(budgets::id.asc())
        .load(conn)
        .map_err(StorageError::from)?;

    let mut rewritten = 0;
    for (record_id, amount_raw) in rows {
        let amount = parse_amount("budget", &record_id, &amount_raw)?;
        let converted = fx::convert(amount, from, to).map_err(Error::from)?;

        diesel::update(budgets::table.find(&record_id))
            .set((
                budgets::amount.eq(converted.to_string()),
                budgets::currency_code.eq(&to.code),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;
        rewritten += 1;
    }
    Ok(rewritten)
}

fn rewrite_goals(
    conn: &mut SqliteConnection,
    user_id: &str,
    from: &Currency,
    to: &Currency,
) -> Result<usize> {
    let rows: Vec<(String, String, String)> = goals::table
        .filter(goals::user_id.eq(user_id))
        .filter(goals::currency_code.eq(&from.code))
        .select((goals::id, goals::target_amount, goals::current_amount))
        .order_by(goals::id.asc())
        .load(conn)
        .map_err(StorageError::from)?;

    let mut rewritten = 0;
    for (record_id, target_raw, current_raw) in rows {
        let target = parse_amount("goal", &record_id, &target_raw)?;
        let current = parse_amount("goal", &record_id, &current_raw)?;
        let converted = fx::convert_many(&[target, current], from, to).map_err(Error::from)?;

        diesel::update(goals::table.find(&record_id))
            .set((
                goals::target_amount.eq(converted[0].to_string()),
                goals::current_amount.eq(converted[1].to_string()),
                goals::currency_code.eq(&to.code),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;
        rewritten += 1;
    }
    Ok(rewritten)
}

fn switch_default_currency(
    conn: &mut SqliteConnection,
    user_id: &str,
    to: &Currency,
) -> Result<()> {
    let preference_db =
        UserCurrencyPreferenceDB::from(UserCurrencyPreference::new(user_id, &to.code));

    diesel::insert_into(user_currency_preferences::table)
        .values(&preference_db)
        .on_conflict(user_currency_preferences::user_id)
        .do_update()
        .set((
            user_currency_preferences::default_currency_code.eq(&preference_db.default_currency_code),
            user_currency_preferences::updated_at.eq(&preference_db.updated_at),
        ))
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(())
}

#[async_trait]
impl RedenominationRepositoryTrait for RedenominationRepository {
    async fn redenominate_user(
        &self,
        user_id: &str,
        from: Currency,
        to: Currency,
    ) -> Result<RedenominationSummary> {
        let user_id_owned = user_id.to_string();
        self.writer
            .exec(move |conn| {
                let summary = RedenominationSummary {
                    earnings: rewrite_earnings(conn, &user_id_owned, &from, &to)?,
                    expenses: rewrite_expenses(conn, &user_id_owned, &from, &to)?,
                    budgets: rewrite_budgets(conn, &user_id_owned, &from, &to)?,
                    goals: rewrite_goals(conn, &user_id_owned, &from, &to)?,
                };

                switch_default_currency(conn, &user_id_owned, &to)?;

                Ok(summary)
            })
            .await
    }
}
