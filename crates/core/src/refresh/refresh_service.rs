use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::Mutex;

use super::refresh_model::{
    AlertPolicy, ApiHealthReport, RefreshConfig, RefreshFailure, RefreshOutcome, UpdateStatistics,
};
use super::refresh_traits::{AlertSink, NoOpAlertSink, RefreshServiceTrait};
use crate::currencies::{Currency, CurrencyRepositoryTrait};
use crate::errors::{Error, Result};
use centime_rates::RateProviderTrait;

/// Decides when a rate refresh is due, executes it, and escalates
/// sustained failure to the alert sink.
///
/// A failed refresh is never fatal: the previous rates stay in place and
/// conversions keep working with stale data.
pub struct RefreshService {
    currencies: Arc<dyn CurrencyRepositoryTrait>,
    provider: Arc<dyn RateProviderTrait>,
    alert_sink: Arc<dyn AlertSink>,
    config: RefreshConfig,
    consecutive_failures: AtomicU32,
    // Serializes overlapping triggers (scheduled tick vs. admin force).
    cycle_guard: Mutex<()>,
}

impl RefreshService {
    pub fn new(
        currencies: Arc<dyn CurrencyRepositoryTrait>,
        provider: Arc<dyn RateProviderTrait>,
        config: RefreshConfig,
    ) -> Self {
        Self {
            currencies,
            provider,
            alert_sink: Arc::new(NoOpAlertSink),
            config,
            consecutive_failures: AtomicU32::new(0),
            cycle_guard: Mutex::new(()),
        }
    }

    /// Sets the alert sink for this service.
    pub fn with_alert_sink(mut self, alert_sink: Arc<dyn AlertSink>) -> Self {
        self.alert_sink = alert_sink;
        self
    }

    /// A refresh is due when the base currency has never been refreshed
    /// or its last refresh is older than the configured interval.
    fn is_due(&self, default_currency: &Currency) -> bool {
        match default_currency.last_updated_at {
            None => true,
            Some(last) => Utc::now().signed_duration_since(last) > self.config.refresh_interval,
        }
    }

    async fn run_cycle(&self, default_currency: &Currency) -> Result<usize> {
        let table = self.provider.fetch_rates(&default_currency.code).await?;
        let updated = self.currencies.update_rates(table.rates, table.as_of).await?;

        self.consecutive_failures.store(0, Ordering::SeqCst);
        info!("Refreshed rates for {} currencies", updated);
        Ok(updated)
    }

    fn record_failure(&self, default_currency: &Currency, err: &Error) {
        let failures = self.consecutive_failures.fetch_add(1, Ordering::SeqCst) + 1;
        warn!("Rate refresh failed (attempt {}): {}", failures, err);

        let threshold = self.config.failure_threshold;
        let should_alert = match self.config.alert_policy {
            AlertPolicy::EveryFailure => failures >= threshold,
            AlertPolicy::Once => failures == threshold,
        };

        if should_alert {
            self.alert_sink.notify(RefreshFailure {
                error: err.to_string(),
                attempt_count: failures,
                last_successful_update: default_currency.last_updated_at,
            });
        }
    }
}

#[async_trait]
impl RefreshServiceTrait for RefreshService {
    async fn tick(&self) -> RefreshOutcome {
        let _guard = self.cycle_guard.lock().await;

        let default_currency = match self.currencies.get_default_currency() {
            Ok(currency) => currency,
            Err(e) => {
                error!("Cannot refresh rates: {}", e);
                return RefreshOutcome::Failed;
            }
        };

        if !self.is_due(&default_currency) {
            return RefreshOutcome::NotDue;
        }

        match self.run_cycle(&default_currency).await {
            Ok(currencies) => RefreshOutcome::Updated { currencies },
            Err(e) => {
                self.record_failure(&default_currency, &e);
                RefreshOutcome::Failed
            }
        }
    }

    async fn force_refresh(&self) -> Result<usize> {
        let _guard = self.cycle_guard.lock().await;

        let default_currency = self.currencies.get_default_currency()?;

        match self.run_cycle(&default_currency).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                self.record_failure(&default_currency, &e);
                Err(e)
            }
        }
    }

    async fn ensure_fresh_on_boot(&self) {
        let outcome = self.tick().await;
        info!("Boot-time rate check: {:?}", outcome);
    }

    fn get_update_statistics(&self) -> Result<UpdateStatistics> {
        let default_currency = self.currencies.get_default_currency()?;
        let currencies = self.currencies.list_all()?;

        Ok(UpdateStatistics {
            currencies_total: currencies.len(),
            currencies_with_rates: currencies.iter().filter(|c| c.has_rate()).count(),
            update_needed: self.is_due(&default_currency),
            default_currency_code: default_currency.code,
        })
    }

    async fn monitor_api_health(&self) -> ApiHealthReport {
        let checked_at = Utc::now();
        let started = Instant::now();

        match self.provider.list_currencies().await {
            Ok(_) => ApiHealthReport {
                reachable: true,
                latency_ms: started.elapsed().as_millis() as u64,
                error: None,
                checked_at,
            },
            Err(e) => ApiHealthReport {
                reachable: false,
                latency_ms: started.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
                checked_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn base_currency(hours_old: Option<i64>) -> Currency {
        Currency {
            code: "USD".to_string(),
            name: "US Dollar".to_string(),
            symbol: "$".to_string(),
            rate_to_base: Decimal::ONE,
            is_default: true,
            is_active: true,
            last_updated_at: hours_old.map(|h| Utc::now() - Duration::hours(h)),
        }
    }

    struct NeverCalledRepository;

    #[async_trait]
    impl CurrencyRepositoryTrait for NeverCalledRepository {
        fn get_default_currency(&self) -> Result<Currency> {
            unreachable!()
        }
        fn get_by_code(&self, _code: &str) -> Result<Currency> {
            unreachable!()
        }
        fn list_active(&self) -> Result<Vec<Currency>> {
            unreachable!()
        }
        fn list_all(&self) -> Result<Vec<Currency>> {
            unreachable!()
        }
        async fn update_rates(
            &self,
            _rates: std::collections::HashMap<String, Decimal>,
            _as_of: chrono::DateTime<Utc>,
        ) -> Result<usize> {
            unreachable!()
        }
        async fn set_default_currency(&self, _code: &str) -> Result<Currency> {
            unreachable!()
        }
        async fn insert(&self, _new: crate::currencies::NewCurrency) -> Result<Currency> {
            unreachable!()
        }
        async fn set_active(&self, _code: &str, _active: bool) -> Result<Currency> {
            unreachable!()
        }
    }

    struct NeverCalledProvider;

    #[async_trait]
    impl RateProviderTrait for NeverCalledProvider {
        async fn fetch_rates(
            &self,
            _base: &str,
        ) -> std::result::Result<centime_rates::RateTable, centime_rates::RatesError> {
            unreachable!()
        }
        async fn list_currencies(
            &self,
        ) -> std::result::Result<
            std::collections::HashMap<String, String>,
            centime_rates::RatesError,
        > {
            unreachable!()
        }
    }

    fn service(config: RefreshConfig) -> RefreshService {
        RefreshService::new(
            Arc::new(NeverCalledRepository),
            Arc::new(NeverCalledProvider),
            config,
        )
    }

    #[test]
    fn test_never_refreshed_is_due() {
        assert!(service(RefreshConfig::default()).is_due(&base_currency(None)));
    }

    #[test]
    fn test_stale_is_due() {
        assert!(service(RefreshConfig::default()).is_due(&base_currency(Some(25))));
    }

    #[test]
    fn test_fresh_is_not_due() {
        assert!(!service(RefreshConfig::default()).is_due(&base_currency(Some(1))));
    }
}
