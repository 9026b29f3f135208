//! Database models for budgets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{parse_date_lenient, parse_decimal_lenient};
use centime_core::budgets::Budget;

/// Database model for a budget row.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub currency_code: String,
    pub period_start: String,
    pub period_end: String,
    pub created_at: String,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            amount: parse_decimal_lenient(&db.amount),
            currency_code: db.currency_code,
            period_start: parse_date_lenient(&db.period_start),
            period_end: parse_date_lenient(&db.period_end),
        }
    }
}
