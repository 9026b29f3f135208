//! Rate-provider implementations.

mod http;
mod traits;

pub use http::{HttpRateProvider, ProviderConfig};
pub use traits::RateProviderTrait;
