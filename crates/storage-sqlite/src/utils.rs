//! Small conversion helpers shared by the repositories.
//!
//! Timestamps are stored as RFC 3339 text, dates as `%Y-%m-%d`, and
//! decimals as their canonical string form. Reads are lenient: a value
//! that fails to parse degrades to the type's zero rather than failing
//! the whole listing. Paths that must not accept corrupt data (the
//! re-denomination rewrite) parse strictly instead.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub fn to_rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

pub fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn parse_decimal_lenient(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|_| Decimal::from(0))
}

pub fn parse_date_lenient(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap_or_default()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
