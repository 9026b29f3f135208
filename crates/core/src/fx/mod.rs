//! FX (Foreign Exchange) module - deterministic amount conversion.

mod converter;
mod fx_errors;

pub use converter::{convert, convert_many, rate_between, round_amount};
pub use fx_errors::FxError;
