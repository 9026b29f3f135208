//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{parse_date_lenient, parse_decimal_lenient};
use centime_core::goals::Goal;

/// Database model for a goal row. Goals carry two monetary columns, both
/// in the goal's currency.
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub currency_code: String,
    pub due_on: Option<String>,
    pub is_achieved: bool,
    pub created_at: String,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            target_amount: parse_decimal_lenient(&db.target_amount),
            current_amount: parse_decimal_lenient(&db.current_amount),
            currency_code: db.currency_code,
            due_on: db.due_on.as_deref().map(parse_date_lenient),
            is_achieved: db.is_achieved,
        }
    }
}
