//! Budget domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending envelope for a period, denominated in its own currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency_code: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Input model for creating a new budget.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency_code: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}
