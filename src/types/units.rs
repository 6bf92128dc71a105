//! Wind speed units.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WindRoseError};

/// Metres per second in one international knot (1852 m / 3600 s).
pub const MPS_PER_KNOT: f64 = 1852.0 / 3600.0;

/// Unit a speed column is recorded in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    #[default]
    Knots,
    MetersPerSecond,
}

impl SpeedUnit {
    /// Conversion factor from this unit to metres per second.
    pub fn to_mps_factor(self) -> f64 {
        match self {
            Self::Knots => MPS_PER_KNOT,
            Self::MetersPerSecond => 1.0,
        }
    }

    /// Convert a speed from this unit into `target`.
    #[inline]
    pub fn convert(self, speed: f64, target: SpeedUnit) -> f64 {
        speed * self.to_mps_factor() / target.to_mps_factor()
    }

    /// Convert a whole column from this unit into `target`.
    pub fn convert_all(self, speeds: &[f64], target: SpeedUnit) -> Vec<f64> {
        let factor = self.to_mps_factor() / target.to_mps_factor();
        speeds.iter().map(|&v| v * factor).collect()
    }

    /// Impact threshold commonly used for this unit (12 kn, 6 m/s).
    pub fn default_threshold(self) -> f64 {
        match self {
            Self::Knots => 12.0,
            Self::MetersPerSecond => 6.0,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knots => f.write_str("knots"),
            Self::MetersPerSecond => f.write_str("m/s"),
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = WindRoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kn" | "kt" | "kts" | "knot" | "knots" => Ok(Self::Knots),
            "m/s" | "mps" | "ms-1" | "m s-1" => Ok(Self::MetersPerSecond),
            other => Err(WindRoseError::invalid_parameter(format!(
                "unknown speed unit '{other}'"
            ))),
        }
    }
}
