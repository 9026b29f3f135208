//! SQLite storage implementation for Centime.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `centime-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the currency catalog, user
//!   preferences, and the four record collections
//! - The single-writer actor that serializes every write inside a
//!   transaction
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. `centime-core` is database-agnostic and works with
//! traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!    storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod currencies;
pub mod earnings;
pub mod expenses;
pub mod goals;
pub mod redenomination;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from centime-core for convenience
pub use centime_core::errors::{DatabaseError, Error, Result};
