//! Bulk re-denomination - atomic rewrite of a user's monetary records
//! from one currency to another.

mod redenomination_model;
mod redenomination_service;
mod redenomination_traits;

pub use redenomination_model::RedenominationSummary;
pub use redenomination_service::RedenominationService;
pub use redenomination_traits::{RedenominationRepositoryTrait, RedenominationServiceTrait};
