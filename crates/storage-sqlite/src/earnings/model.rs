//! Database models for earnings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{parse_date_lenient, parse_decimal_lenient};
use centime_core::earnings::Earning;

/// Database model for an earning row.
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
#[diesel(table_name = crate::schema::earnings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct EarningDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub currency_code: String,
    pub received_on: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<EarningDB> for Earning {
    fn from(db: EarningDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            amount: parse_decimal_lenient(&db.amount),
            currency_code: db.currency_code,
            received_on: parse_date_lenient(&db.received_on),
            notes: db.notes,
        }
    }
}
