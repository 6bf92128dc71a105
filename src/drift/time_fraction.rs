//! Fraction of the observed period covered by one record.
//!
//! Multi-year records at sub-minute resolution have spans of order 1e8 s,
//! so the ratio is formed in decimal arithmetic from exact integer seconds
//! and nanoseconds and only converted to `f64` at the end.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::decimal::decimal_to_f64;
use crate::error::{Result, WindRoseError};

/// Compute `t = record_duration / (last − first)`.
///
/// The span is taken between the first and last timestamps as given, so the
/// sequence must be time-ascending.
///
/// # Errors
/// - `InsufficientRecords` for fewer than two timestamps
/// - `ZeroTimeSpan` when first and last coincide
/// - `NegativeTimeSpan` when the last timestamp precedes the first
/// - `InvalidParameter` for a negative record duration
///
/// # Example
///
/// ```
/// use aeolian_rs::drift::time_fraction;
/// use chrono::{NaiveDate, TimeDelta};
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let stamps = [start, start + TimeDelta::hours(10)];
/// let t = time_fraction(TimeDelta::hours(1), &stamps).unwrap();
/// assert_eq!(t, 0.1);
/// ```
pub fn time_fraction(record_duration: TimeDelta, timestamps: &[NaiveDateTime]) -> Result<f64> {
    if timestamps.len() < 2 {
        return Err(WindRoseError::InsufficientRecords {
            required: 2,
            found: timestamps.len(),
        });
    }
    if record_duration < TimeDelta::zero() {
        return Err(WindRoseError::invalid_parameter(format!(
            "record duration must be non-negative, got {record_duration}"
        )));
    }

    let span = timestamps[timestamps.len() - 1] - timestamps[0];
    if span == TimeDelta::zero() {
        return Err(WindRoseError::ZeroTimeSpan);
    }
    if span < TimeDelta::zero() {
        return Err(WindRoseError::NegativeTimeSpan {
            seconds: span.num_seconds(),
        });
    }

    let ratio = delta_to_decimal(record_duration)?
        .checked_div(delta_to_decimal(span)?)
        .ok_or_else(|| WindRoseError::DecimalOverflow("duration / span".to_string()))?;

    decimal_to_f64(ratio)
}

/// Exact decimal number of seconds in a non-negative delta.
fn delta_to_decimal(delta: TimeDelta) -> Result<Decimal> {
    let seconds = Decimal::from(delta.num_seconds());
    let nanos = Decimal::new(i64::from(delta.subsec_nanos()), 9);
    seconds
        .checked_add(nanos)
        .ok_or_else(|| WindRoseError::DecimalOverflow(format!("{delta} in seconds")))
}
