//! Elementwise conversions applied to wind columns before analysis.
//!
//! # Wind profile laws
//!
//! Speeds measured at a recorder height `z_rec` are brought to a reference
//! height `z_ref` (Arya, 1988; Jacobson, 1999):
//!
//! ```text
//! log law:    v_ref = v_rec · ln(z_ref / z0) / ln(z_rec / z0)
//! power law:  v_ref = v_rec · (z_ref / z_rec)^α
//! ```
//!
//! with roughness length `z0` = 0.1 m and friction exponent `α` = 1/7 by
//! default (Archer and Jacobson, 2003).

use crate::error::{Result, WindRoseError};
use crate::types::{CardinalDirection, MPS_PER_KNOT};

/// Default reference height in metres.
pub const DEFAULT_REFERENCE_HEIGHT: f64 = 10.0;
/// Default roughness length in metres.
pub const DEFAULT_ROUGHNESS_LENGTH: f64 = 0.1;
/// Default power-law friction exponent.
pub const DEFAULT_POWER_LAW_ALPHA: f64 = 1.0 / 7.0;

fn ensure_positive_height(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(WindRoseError::invalid_parameter(format!(
            "{name} must be a positive height, got {value}"
        )));
    }
    Ok(())
}

/// Adjust speeds to `z_ref` with the logarithmic wind profile.
///
/// # Errors
/// `InvalidParameter` for a non-positive height or roughness length, or
/// when `z_rec == z0` (the profile is singular there).
pub fn wind_log_law(speeds: &[f64], z_rec: f64, z_ref: f64, z0: f64) -> Result<Vec<f64>> {
    ensure_positive_height("recorder height", z_rec)?;
    ensure_positive_height("reference height", z_ref)?;
    ensure_positive_height("roughness length", z0)?;

    let denominator = (z_rec / z0).ln();
    if denominator == 0.0 {
        return Err(WindRoseError::invalid_parameter(format!(
            "recorder height equals roughness length ({z0} m)"
        )));
    }
    let factor = (z_ref / z0).ln() / denominator;
    Ok(speeds.iter().map(|&v| v * factor).collect())
}

/// Adjust speeds to `z_ref` with the power-law wind profile.
///
/// # Errors
/// `InvalidParameter` for a non-positive height or a non-finite exponent.
pub fn wind_power_law(speeds: &[f64], z_rec: f64, z_ref: f64, alpha: f64) -> Result<Vec<f64>> {
    ensure_positive_height("recorder height", z_rec)?;
    ensure_positive_height("reference height", z_ref)?;
    if !alpha.is_finite() {
        return Err(WindRoseError::invalid_parameter(format!(
            "power-law exponent must be finite, got {alpha}"
        )));
    }
    let factor = (z_ref / z_rec).powf(alpha);
    Ok(speeds.iter().map(|&v| v * factor).collect())
}

/// Height adjustment applied to a speed column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightAdjustment {
    /// Logarithmic profile
    LogLaw { z_rec: f64, z_ref: f64, z0: f64 },
    /// Power-law profile
    PowerLaw { z_rec: f64, z_ref: f64, alpha: f64 },
}

impl HeightAdjustment {
    /// Log law from `z_rec` to 10 m with z0 = 0.1 m.
    pub fn log_law(z_rec: f64) -> Self {
        Self::LogLaw {
            z_rec,
            z_ref: DEFAULT_REFERENCE_HEIGHT,
            z0: DEFAULT_ROUGHNESS_LENGTH,
        }
    }

    /// Power law from `z_rec` to 10 m with α = 1/7.
    pub fn power_law(z_rec: f64) -> Self {
        Self::PowerLaw {
            z_rec,
            z_ref: DEFAULT_REFERENCE_HEIGHT,
            alpha: DEFAULT_POWER_LAW_ALPHA,
        }
    }

    /// Set the reference height.
    pub fn with_reference_height(self, height: f64) -> Self {
        match self {
            Self::LogLaw { z_rec, z0, .. } => Self::LogLaw {
                z_rec,
                z_ref: height,
                z0,
            },
            Self::PowerLaw { z_rec, alpha, .. } => Self::PowerLaw {
                z_rec,
                z_ref: height,
                alpha,
            },
        }
    }

    /// Apply the adjustment to every speed.
    pub fn apply(&self, speeds: &[f64]) -> Result<Vec<f64>> {
        match *self {
            Self::LogLaw { z_rec, z_ref, z0 } => wind_log_law(speeds, z_rec, z_ref, z0),
            Self::PowerLaw { z_rec, z_ref, alpha } => wind_power_law(speeds, z_rec, z_ref, alpha),
        }
    }
}

/// Resolve every bearing to its nearest cardinal direction.
///
/// # Errors
/// `InvalidDirection` naming the first non-finite value.
pub fn degrees_to_cardinal(degrees: &[f64]) -> Result<Vec<CardinalDirection>> {
    degrees
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            CardinalDirection::from_degrees(d)
                .map_err(|_| WindRoseError::InvalidDirection(format!("value {i}: {d}")))
        })
        .collect()
}

/// Knots to metres per second.
#[inline]
pub fn knots_to_mps(knots: f64) -> f64 {
    knots * MPS_PER_KNOT
}

/// Metres per second to knots.
#[inline]
pub fn mps_to_knots(mps: f64) -> f64 {
    mps / MPS_PER_KNOT
}
