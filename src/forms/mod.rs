//! Request payloads accepted by the HTTP layer and their conversion into
//! domain values.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

pub mod amenities;
pub mod bookings;
pub mod cars;
pub mod categories;
pub mod customers;
pub mod price_types;

/// Maximum number of decimal places accepted for monetary amounts.
const AMOUNT_MAX_SCALE: u32 = 2;

/// Date formats accepted for journey dates, tried in order.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raised when a monetary amount cannot be converted into cents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAmount {
    #[error("amount `{0}` must not be negative")]
    Negative(Decimal),
    #[error("amount `{0}` has more than two decimal places")]
    TooPrecise(Decimal),
    #[error("amount `{0}` is too large")]
    Overflow(Decimal),
}

/// Convert a non-negative amount with at most two decimal places into cents.
pub fn amount_to_cents(amount: Decimal) -> Result<i64, InvalidAmount> {
    if amount < Decimal::ZERO {
        return Err(InvalidAmount::Negative(amount));
    }

    let amount = amount.normalize();
    if amount.scale() > AMOUNT_MAX_SCALE {
        return Err(InvalidAmount::TooPrecise(amount));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or(InvalidAmount::Overflow(amount))
}

/// Parse a journey date. A bare date is read as midnight.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Collapse runs of whitespace and drop control characters.
pub fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize an optional text field, mapping blank values to `None`.
pub fn sanitize_optional_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}
