/// Decimal places for stored monetary amounts
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Hours between scheduled rate refreshes
pub const DEFAULT_REFRESH_INTERVAL_HOURS: i64 = 24;

/// Consecutive refresh failures before an alert is emitted
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;
