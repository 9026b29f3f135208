use super::currencies_model::{canonical_code, validate_code, Currency, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Service over the currency catalog.
///
/// Normalizes and validates codes before they reach storage, and is the
/// only mutation surface outside the refresh path.
#[derive(Clone)]
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn get_default_currency(&self) -> Result<Currency> {
        self.repository.get_default_currency()
    }

    fn get_by_code(&self, code: &str) -> Result<Currency> {
        let code = canonical_code(code);
        validate_code(&code)?;
        self.repository.get_by_code(&code)
    }

    fn list_active(&self) -> Result<Vec<Currency>> {
        self.repository.list_active()
    }

    fn list_all(&self) -> Result<Vec<Currency>> {
        self.repository.list_all()
    }

    async fn update_rates(
        &self,
        rates: HashMap<String, Decimal>,
        as_of: DateTime<Utc>,
    ) -> Result<usize> {
        let normalized: HashMap<String, Decimal> = rates
            .into_iter()
            .map(|(code, rate)| (canonical_code(&code), rate))
            .collect();

        let updated = self.repository.update_rates(normalized, as_of).await?;
        debug!("Applied rate batch: {} currencies updated", updated);
        Ok(updated)
    }

    async fn set_default_currency(&self, code: &str) -> Result<Currency> {
        let code = canonical_code(code);
        validate_code(&code)?;

        let currency = self.repository.set_default_currency(&code).await?;
        info!("Base currency switched to {}", currency.code);
        Ok(currency)
    }

    async fn add_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let new_currency = NewCurrency {
            code: canonical_code(&new_currency.code),
            ..new_currency
        };
        validate_code(&new_currency.code)?;

        let currency = self.repository.insert(new_currency).await?;
        info!("Currency {} added to the catalog", currency.code);
        Ok(currency)
    }

    async fn set_active(&self, code: &str, active: bool) -> Result<Currency> {
        let code = canonical_code(code);
        validate_code(&code)?;
        self.repository.set_active(&code, active).await
    }

    async fn seed_currencies(&self, currencies: Vec<NewCurrency>) -> Result<usize> {
        let mut inserted = 0;
        let mut first_code: Option<String> = None;

        for new_currency in currencies {
            let code = canonical_code(&new_currency.code);
            validate_code(&code)?;
            first_code.get_or_insert_with(|| code.clone());

            match self.repository.get_by_code(&code) {
                Ok(_) => continue,
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }

            self.repository
                .insert(NewCurrency {
                    code,
                    ..new_currency
                })
                .await?;
            inserted += 1;
        }

        match self.repository.get_default_currency() {
            Ok(_) => {}
            Err(crate::errors::Error::Configuration(_)) => {
                if let Some(code) = first_code {
                    self.repository.set_default_currency(&code).await?;
                }
            }
            Err(e) => return Err(e),
        }

        if inserted > 0 {
            info!("Seeded {} currencies", inserted);
        }
        Ok(inserted)
    }
}
