//! Database models for the currency catalog.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{now_rfc3339, parse_decimal_lenient, parse_rfc3339, to_rfc3339};
use centime_core::currencies::{Currency, NewCurrency};

/// Database model for a currency row.
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
#[diesel(table_name = crate::schema::currencies)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDB {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub rate_to_base: String,
    pub is_default: bool,
    pub is_active: bool,
    pub last_updated_at: Option<String>,
    pub created_at: String,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            code: db.code,
            name: db.name,
            symbol: db.symbol,
            rate_to_base: parse_decimal_lenient(&db.rate_to_base),
            is_default: db.is_default,
            is_active: db.is_active,
            last_updated_at: db.last_updated_at.as_deref().and_then(parse_rfc3339),
        }
    }
}

impl From<NewCurrency> for CurrencyDB {
    fn from(domain: NewCurrency) -> Self {
        Self {
            code: domain.code,
            name: domain.name,
            symbol: domain.symbol,
            rate_to_base: "0".to_string(),
            is_default: false,
            is_active: domain.is_active,
            last_updated_at: None,
            created_at: now_rfc3339(),
        }
    }
}

impl From<Currency> for CurrencyDB {
    fn from(domain: Currency) -> Self {
        Self {
            code: domain.code,
            name: domain.name,
            symbol: domain.symbol,
            rate_to_base: domain.rate_to_base.to_string(),
            is_default: domain.is_default,
            is_active: domain.is_active,
            last_updated_at: domain.last_updated_at.map(to_rfc3339),
            created_at: now_rfc3339(),
        }
    }
}
