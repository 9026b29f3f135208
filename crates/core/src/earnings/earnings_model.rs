//! Earning domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An income record, denominated in its own currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Earning {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency_code: String,
    pub received_on: NaiveDate,
    pub notes: Option<String>,
}

/// Input model for recording a new earning.
///
/// `currency_code` left empty defaults to the owner's preferred currency.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEarning {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency_code: Option<String>,
    pub received_on: NaiveDate,
    pub notes: Option<String>,
}
