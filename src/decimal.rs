//! Decimal helpers shared by the time-fraction and N-summary code.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::{Result, WindRoseError};

/// Convert a decimal to the nearest `f64`.
///
/// Parsing the decimal text is correctly rounded; mantissa / 10^scale is not.
pub(crate) fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .normalize()
        .to_string()
        .parse::<f64>()
        .map_err(|e| WindRoseError::DecimalOverflow(format!("{value} as f64: {e}")))
}

/// Round to `decimals` places, ties to even.
///
/// Non-finite values and values outside the decimal range are returned
/// unchanged.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(decimals))
        .and_then(|d| decimal_to_f64(d).ok())
        .unwrap_or(value)
}
