//! Error types for rate-provider operations.

use thiserror::Error;

/// Errors that can occur while talking to the external rate provider.
///
/// All variants are transient from the caller's point of view: a later
/// attempt against the same endpoint may succeed. None of them should
/// ever crash the host process; the refresh policy catches them and
/// keeps serving the previous rates.
#[derive(Error, Debug)]
pub enum RatesError {
    /// Connection failure or timeout before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered, but the body did not match the expected shape.
    #[error("Malformed provider response: {0}")]
    Parse(String),

    /// The provider answered with a non-2xx status.
    #[error("Provider returned HTTP {status}")]
    Provider { status: u16 },
}

impl RatesError {
    /// Whether the caller may retry the operation later.
    ///
    /// Currently every variant is retryable; the method exists so the
    /// refresh policy does not hard-code that assumption.
    pub fn is_retryable(&self) -> bool {
        true
    }
}

impl From<reqwest::Error> for RatesError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return RatesError::Provider {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return RatesError::Parse(err.to_string());
        }
        RatesError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_retryable() {
        assert!(RatesError::Network("connection refused".to_string()).is_retryable());
        assert!(RatesError::Parse("unexpected token".to_string()).is_retryable());
        assert!(RatesError::Provider { status: 503 }.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = RatesError::Provider { status: 429 };
        assert_eq!(format!("{}", err), "Provider returned HTTP 429");

        let err = RatesError::Network("timed out".to_string());
        assert_eq!(format!("{}", err), "Network error: timed out");
    }
}
