mod model;
mod repository;

pub use model::UserCurrencyPreferenceDB;
pub use repository::UserPreferencesRepository;
