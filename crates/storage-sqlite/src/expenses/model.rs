//! Database models for expenses.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{parse_date_lenient, parse_decimal_lenient};
use centime_core::expenses::Expense;

/// Database model for an expense row.
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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: Option<String>,
    pub amount: String,
    pub currency_code: String,
    pub spent_on: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            amount: parse_decimal_lenient(&db.amount),
            currency_code: db.currency_code,
            spent_on: parse_date_lenient(&db.spent_on),
            notes: db.notes,
        }
    }
}
