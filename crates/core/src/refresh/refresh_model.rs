//! Refresh policy models and configuration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FAILURE_THRESHOLD, DEFAULT_REFRESH_INTERVAL_HOURS};

/// What to do once the consecutive-failure counter reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertPolicy {
    /// Alert at the threshold and on every failure past it. The counter
    /// is not reset by alerting, so sustained failure keeps paging.
    EveryFailure,
    /// Alert exactly once per outage; the next success re-arms it.
    Once,
}

/// Configuration for the refresh policy.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How old the default currency's last refresh may get before a
    /// scheduled tick acts.
    pub refresh_interval: Duration,
    /// Consecutive failures before the alert sink is notified.
    pub failure_threshold: u32,
    pub alert_policy: AlertPolicy,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::hours(DEFAULT_REFRESH_INTERVAL_HOURS),
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            alert_policy: AlertPolicy::EveryFailure,
        }
    }
}

/// What a scheduled tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cached rates were fresh enough; nothing was fetched.
    NotDue,
    Updated { currencies: usize },
    /// The attempt failed; previous rates stay in place.
    Failed,
}

/// Structured report handed to the alert sink after sustained failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshFailure {
    pub error: String,
    /// Consecutive failures so far, including this one.
    pub attempt_count: u32,
    pub last_successful_update: Option<DateTime<Utc>>,
}

/// Read-only summary for operational monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatistics {
    pub currencies_total: usize,
    pub currencies_with_rates: usize,
    pub update_needed: bool,
    pub default_currency_code: String,
}

/// Result of probing the external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealthReport {
    pub reachable: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}
