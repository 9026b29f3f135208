//! Database models for user currency preferences.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::now_rfc3339;
use centime_core::users::UserCurrencyPreference;

/// Database model for a user's currency preference row.
///
/// `displayed_currency_codes` is a JSON array of codes; order carries the
/// user's picker ordering.
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
#[diesel(table_name = crate::schema::user_currency_preferences)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserCurrencyPreferenceDB {
    pub user_id: String,
    pub default_currency_code: String,
    pub displayed_currency_codes: String,
    pub updated_at: String,
}

impl From<UserCurrencyPreferenceDB> for UserCurrencyPreference {
    fn from(db: UserCurrencyPreferenceDB) -> Self {
        Self {
            user_id: db.user_id,
            default_currency_code: db.default_currency_code,
            displayed_currency_codes: serde_json::from_str(&db.displayed_currency_codes)
                .unwrap_or_default(),
        }
    }
}

impl From<UserCurrencyPreference> for UserCurrencyPreferenceDB {
    fn from(domain: UserCurrencyPreference) -> Self {
        Self {
            user_id: domain.user_id,
            default_currency_code: domain.default_currency_code,
            displayed_currency_codes: serde_json::to_string(&domain.displayed_currency_codes)
                .unwrap_or_else(|_| "[]".to_string()),
            updated_at: now_rfc3339(),
        }
    }
}
