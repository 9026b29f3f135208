//! Shared setup for the storage integration tests: a throwaway SQLite
//! database with migrations applied, a writer actor, and a seeded
//! currency catalog (USD base).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use centime_core::currencies::{CurrencyRepositoryTrait, NewCurrency};
use centime_storage_sqlite::currencies::CurrencyRepository;
use centime_storage_sqlite::db::{self, spawn_writer, DbPool, WriteHandle};

pub struct TestDb {
    // Held so the database directory outlives the test.
    _dir: TempDir,
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("centime.db");
    let db_path = db_path.to_str().unwrap();

    {
        use diesel::connection::SimpleConnection;
        use diesel::Connection;
        let mut conn = diesel::SqliteConnection::establish(db_path).unwrap();
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;")
            .unwrap();
    }

    let pool = db::create_pool(db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());

    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

pub fn new_currency(code: &str, name: &str, symbol: &str) -> NewCurrency {
    NewCurrency {
        code: code.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        is_active: true,
    }
}

/// Seeds USD (default, rate 1), EUR 0.92, GBP 0.80, JPY 157.31.
pub async fn seed_currencies(repository: &CurrencyRepository) {
    for (code, name, symbol) in [
        ("USD", "US Dollar", "$"),
        ("EUR", "Euro", "€"),
        ("GBP", "Pound Sterling", "£"),
        ("JPY", "Japanese Yen", "¥"),
    ] {
        repository
            .insert(new_currency(code, name, symbol))
            .await
            .unwrap();
    }

    repository.set_default_currency("USD").await.unwrap();

    repository
        .update_rates(
            HashMap::from([
                ("USD".to_string(), dec!(1)),
                ("EUR".to_string(), dec!(0.92)),
                ("GBP".to_string(), dec!(0.80)),
                ("JPY".to_string(), dec!(157.31)),
            ]),
            Utc::now(),
        )
        .await
        .unwrap();
}

pub async fn currency_repository(test_db: &TestDb) -> CurrencyRepository {
    CurrencyRepository::new(test_db.pool.clone(), test_db.writer.clone())
}
