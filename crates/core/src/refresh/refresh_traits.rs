//! Alert sink trait and refresh service contract.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::refresh_model::{ApiHealthReport, RefreshFailure, RefreshOutcome, UpdateStatistics};
use crate::errors::Result;

/// Trait for receiving refresh-failure notifications.
///
/// Implementations hand the report to a mailer or alerting component;
/// this subsystem does not format or deliver the message itself.
///
/// `notify()` must be fast and non-blocking, and a failure to deliver
/// must not affect the refresh cycle (best-effort).
pub trait AlertSink: Send + Sync {
    fn notify(&self, failure: RefreshFailure);
}

/// No-op implementation for tests or contexts that don't need alerts.
#[derive(Clone, Default)]
pub struct NoOpAlertSink;

impl AlertSink for NoOpAlertSink {
    fn notify(&self, _failure: RefreshFailure) {
        // Intentionally empty - alerts are discarded
    }
}

/// Mock sink for testing - collects emitted failure reports.
#[derive(Clone, Default)]
pub struct MockAlertSink {
    failures: Arc<Mutex<Vec<RefreshFailure>>>,
}

impl MockAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected failure reports.
    pub fn failures(&self) -> Vec<RefreshFailure> {
        self.failures.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.failures.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().unwrap().is_empty()
    }
}

impl AlertSink for MockAlertSink {
    fn notify(&self, failure: RefreshFailure) {
        self.failures.lock().unwrap().push(failure);
    }
}

/// Trait defining the contract for refresh policy operations.
#[async_trait]
pub trait RefreshServiceTrait: Send + Sync {
    /// Scheduled entry point. Swallows every error: a failed refresh
    /// leaves the previous rates in place and the host keeps serving.
    async fn tick(&self) -> RefreshOutcome;

    /// Admin entry point; bypasses the due-check and propagates errors
    /// so the caller can surface them.
    async fn force_refresh(&self) -> Result<usize>;

    /// Boot-time check; logs and continues on failure so startup never
    /// blocks on the network.
    async fn ensure_fresh_on_boot(&self);

    fn get_update_statistics(&self) -> Result<UpdateStatistics>;

    async fn monitor_api_health(&self) -> ApiHealthReport;
}
