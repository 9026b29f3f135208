//! User currency preference models.

use serde::{Deserialize, Serialize};

/// A user's currency settings.
///
/// `default_currency_code` denominates new records for this user and must
/// reference an active currency. Default changes never go through the
/// preference repository directly; they route through the re-denomination
/// service so stored amounts and the preference switch together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCurrencyPreference {
    pub user_id: String,
    pub default_currency_code: String,
    /// Ordered set of codes the user wants visible in UI pickers.
    pub displayed_currency_codes: Vec<String>,
}

impl UserCurrencyPreference {
    pub fn new(user_id: &str, default_currency_code: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            default_currency_code: default_currency_code.to_string(),
            displayed_currency_codes: vec![default_currency_code.to_string()],
        }
    }
}
