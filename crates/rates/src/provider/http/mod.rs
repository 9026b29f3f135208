//! HTTP rate provider.
//!
//! Talks to an exchangerate.host-compatible endpoint:
//! - `GET {base_url}/latest?base={code}` returns a JSON object mapping
//!   lowercase ISO codes to float rates relative to the requested base.
//! - `GET {base_url}/symbols` returns the provider's currency catalog.
//!
//! No authentication is required. Every request carries a bounded timeout
//! so a stalled provider cannot hang the refresh task.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::RatesError;
use crate::models::{canonical_code, RateTable};
use crate::provider::RateProviderTrait;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";

/// Configuration for [`HttpRateProvider`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Response from the `latest` rates endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[allow(dead_code)]
    base: Option<String>,
    /// Unix timestamp of the quote batch, when the provider reports one.
    timestamp: Option<i64>,
    rates: HashMap<String, f64>,
}

/// Response from the `symbols` endpoint.
#[derive(Debug, Deserialize)]
struct SymbolsResponse {
    symbols: HashMap<String, SymbolEntry>,
}

#[derive(Debug, Deserialize)]
struct SymbolEntry {
    description: String,
}

pub struct HttpRateProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpRateProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn latest_url(&self, base: &str) -> String {
        format!(
            "{}/latest?base={}",
            self.config.base_url,
            base.to_ascii_lowercase()
        )
    }

    fn symbols_url(&self) -> String {
        format!("{}/symbols", self.config.base_url)
    }
}

impl Default for HttpRateProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

/// Builds a [`RateTable`] from a decoded provider response.
///
/// Keys are normalized to canonical casing and float rates converted to
/// `Decimal`. The base currency is guaranteed to be present with rate 1.
fn rate_table_from_response(
    base: &str,
    response: LatestRatesResponse,
) -> Result<RateTable, RatesError> {
    let base = canonical_code(base);
    let mut rates = HashMap::with_capacity(response.rates.len() + 1);

    for (code, rate) in response.rates {
        let rate = Decimal::try_from(rate)
            .map_err(|e| RatesError::Parse(format!("rate for '{}': {}", code, e)))?;
        rates.insert(canonical_code(&code), rate);
    }

    rates.insert(base.clone(), Decimal::ONE);

    let as_of = response
        .timestamp
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
        .unwrap_or_else(Utc::now);

    Ok(RateTable { base, as_of, rates })
}

#[async_trait]
impl RateProviderTrait for HttpRateProvider {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, RatesError> {
        let url = self.latest_url(base);
        debug!("Fetching exchange rates from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Provider {
                status: status.as_u16(),
            });
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RatesError::Parse(e.to_string()))?;

        if body.rates.is_empty() {
            return Err(RatesError::Parse("empty rate table".to_string()));
        }

        rate_table_from_response(base, body)
    }

    async fn list_currencies(&self) -> Result<HashMap<String, String>, RatesError> {
        let url = self.symbols_url();
        debug!("Fetching currency catalog from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Provider {
                status: status.as_u16(),
            });
        }

        let body: SymbolsResponse = response
            .json()
            .await
            .map_err(|e| RatesError::Parse(e.to_string()))?;

        Ok(body
            .symbols
            .into_iter()
            .map(|(code, entry)| (canonical_code(&code), entry.description))
            .collect())
    }
}
