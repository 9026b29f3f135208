//! Expense domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending record, denominated in its own currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency_code: String,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
}

/// Input model for recording a new expense.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency_code: Option<String>,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
}
