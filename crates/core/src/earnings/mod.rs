//! Earnings - income records.

mod earnings_model;
mod earnings_service;
mod earnings_traits;

pub use earnings_model::{Earning, NewEarning};
pub use earnings_service::EarningService;
pub use earnings_traits::{EarningRepositoryTrait, EarningServiceTrait};
