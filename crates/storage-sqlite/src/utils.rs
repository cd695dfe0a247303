//! Conversion helpers shared by the repository modules.

use chrono::{DateTime, NaiveDateTime, Utc};
use log::error;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT decimal column, falling back to zero on malformed data.
///
/// The storage layer writes these columns itself, so a parse failure means
/// corruption; it is logged rather than propagated to keep reads total.
pub fn parse_decimal_tolerant(value: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        error!(
            "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
            field_name, value, e
        );
        Decimal::ZERO
    })
}

/// Converts a stored naive UTC timestamp to the domain representation.
pub fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(naive, Utc)
}
