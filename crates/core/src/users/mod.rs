//! Per-user currency preferences.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::UserCurrencyPreference;
pub use users_service::UserPreferencesService;
pub use users_traits::{UserPreferencesRepositoryTrait, UserPreferencesServiceTrait};
