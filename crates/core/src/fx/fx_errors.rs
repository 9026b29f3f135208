use thiserror::Error;

/// Errors raised by the conversion engine.
#[derive(Error, Debug)]
pub enum FxError {
    /// The currency has no cached rate yet (never refreshed, or rebased
    /// and awaiting the next refresh).
    #[error("No exchange rate available for {0}")]
    MissingRate(String),
}
