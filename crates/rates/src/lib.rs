//! Exchange-rate provider client for Centime.
//!
//! This crate is the only place that talks to the external rate-provider API.
//! It fetches current exchange rates and the provider's currency catalog,
//! normalizes them into the internal representation, and classifies failures
//! so callers can drive retry and alerting. It never writes to the currency
//! store: fetching and committing are separate concerns.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RatesError;
pub use models::RateTable;
pub use provider::{HttpRateProvider, ProviderConfig, RateProviderTrait};
