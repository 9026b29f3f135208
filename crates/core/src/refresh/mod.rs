//! Rate refresh policy - scheduling, retry, and failure escalation.

mod refresh_model;
mod refresh_service;
mod refresh_traits;

pub use refresh_model::{
    AlertPolicy, ApiHealthReport, RefreshConfig, RefreshFailure, RefreshOutcome, UpdateStatistics,
};
pub use refresh_service::RefreshService;
pub use refresh_traits::{AlertSink, MockAlertSink, NoOpAlertSink, RefreshServiceTrait};
