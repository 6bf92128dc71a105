//! Resultant drift potential and direction.
//!
//! # Vector sum
//!
//! Each cardinal direction contributes a vector of magnitude `r` at its
//! bearing `θ`, measured clockwise from North:
//!
//! ```text
//! x = Σ r · sin θ      (east component)
//! y = Σ r · cos θ      (north component)
//! RDP = √(x² + y²)
//! RDD = atan2(x, y)    mapped into [0°, 360°)
//! ```
//!
//! The ratio RDP / DP measures directional variability: 1 for a unimodal
//! wind regime, approaching 0 when opposing winds cancel.

use tracing::warn;

use super::potential::AreaDriftPotential;
use crate::error::{Result, WindRoseError};
use crate::types::CardinalDirection;

/// Relative magnitude below which the resultant is treated as zero.
const CANCELLATION_TOLERANCE: f64 = 1e-12;

/// Resultant of a directional distribution, with or without the RDP/DP ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResultantDrift {
    /// Resultant vector only
    Vector { rdp: f64, rdd: f64 },
    /// Resultant vector and RDP / DP
    WithRatio { rdp: f64, rdd: f64, ratio: f64 },
}

impl ResultantDrift {
    /// Resultant drift potential.
    pub fn rdp(&self) -> f64 {
        match *self {
            Self::Vector { rdp, .. } | Self::WithRatio { rdp, .. } => rdp,
        }
    }

    /// Resultant drift direction in degrees, [0, 360).
    pub fn rdd(&self) -> f64 {
        match *self {
            Self::Vector { rdd, .. } | Self::WithRatio { rdd, .. } => rdd,
        }
    }

    /// RDP / DP, if a reference was supplied.
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            Self::Vector { .. } => None,
            Self::WithRatio { ratio, .. } => Some(ratio),
        }
    }

    /// RDD turned by 180°.
    ///
    /// Directions in a wind record are the bearing the wind blows *from*;
    /// sand moves the other way.
    pub fn transport_bearing(&self) -> f64 {
        normalize_bearing(self.rdd() + 180.0)
    }
}

/// Which drift potential a resultant's ratio is taken against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DpReference {
    /// Report RDP and RDD only
    #[default]
    Omit,
    /// One DP shared by every period
    Total(f64),
    /// Each period's own summed DP
    PerPeriod,
}

/// RDP and RDD of a 16-direction distribution, clockwise from N.
///
/// # Errors
/// `InvalidParameter` if any magnitude is not finite.
pub fn resultant_vector(distribution: &[f64; 16]) -> Result<(f64, f64)> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut magnitude = 0.0;

    for (dir, &r) in CardinalDirection::ALL.iter().zip(distribution) {
        if !r.is_finite() {
            return Err(WindRoseError::invalid_parameter(format!(
                "drift potential for {dir} is not finite: {r}"
            )));
        }
        let (sin, cos) = dir.bearing_radians().sin_cos();
        x += r * sin;
        y += r * cos;
        magnitude += r.abs();
    }

    let rdp = x.hypot(y);
    if magnitude == 0.0 || rdp <= CANCELLATION_TOLERANCE * magnitude {
        return Ok((0.0, 0.0));
    }

    Ok((rdp, normalize_bearing(x.atan2(y).to_degrees())))
}

/// Resultant of a distribution, with the ratio against `dp` if given.
///
/// # Errors
/// `InvalidParameter` if a magnitude is not finite or `dp` is not a
/// positive finite number.
///
/// # Example
///
/// ```
/// use aeolian_rs::drift::resultant;
///
/// let mut dist = [0.0; 16];
/// dist[4] = 30.0; // E
/// let r = resultant(&dist, Some(60.0)).unwrap();
/// assert!((r.rdp() - 30.0).abs() < 1e-9);
/// assert!((r.rdd() - 90.0).abs() < 1e-9);
/// assert_eq!(r.ratio(), Some(0.5));
/// ```
pub fn resultant(distribution: &[f64; 16], dp: Option<f64>) -> Result<ResultantDrift> {
    let (rdp, rdd) = resultant_vector(distribution)?;

    let Some(dp) = dp else {
        return Ok(ResultantDrift::Vector { rdp, rdd });
    };

    if !(dp.is_finite() && dp > 0.0) {
        return Err(WindRoseError::invalid_parameter(format!(
            "drift potential reference must be positive, got {dp}"
        )));
    }

    let ratio = rdp / dp;
    if ratio > 1.0 + CANCELLATION_TOLERANCE {
        warn!(rdp, dp, ratio, "RDP/DP ratio exceeds 1; DP reference is smaller than its parts");
    }

    Ok(ResultantDrift::WithRatio { rdp, rdd, ratio })
}

impl AreaDriftPotential {
    /// Resultant of the surface's directional totals.
    ///
    /// The ratio is taken against the surface total and omitted when that
    /// total is not positive.
    pub fn resultant(&self) -> Result<ResultantDrift> {
        let total = self.total();
        resultant(&self.directional_totals(), (total > 0.0).then_some(total))
    }
}

/// Map any bearing into [0, 360).
fn normalize_bearing(degrees: f64) -> f64 {
    let b = degrees.rem_euclid(360.0);
    if b >= 360.0 { 0.0 } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::DriftPotential;
    use crate::types::SpeedBins;

    fn single(dir: CardinalDirection, mass: f64) -> [f64; 16] {
        let mut dist = [0.0; 16];
        dist[dir.index()] = mass;
        dist
    }

    #[test]
    fn test_single_direction_mass() {
        for dir in CardinalDirection::ALL {
            let (rdp, rdd) = resultant_vector(&single(dir, 42.0)).unwrap();
            assert!((rdp - 42.0).abs() < 1e-9, "{dir}: rdp {rdp}");
            assert!((rdd - dir.bearing()).abs() < 1e-9, "{dir}: rdd {rdd}");
        }
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut dist = [0.0; 16];
        for dir in [CardinalDirection::N, CardinalDirection::E, CardinalDirection::S, CardinalDirection::W] {
            dist[dir.index()] = 10.0;
        }
        let r = resultant(&dist, None).unwrap();
        assert!(r.rdp().abs() < 1e-9);
        assert_eq!(r.rdd(), 0.0);
        assert_eq!(r.ratio(), None);
    }

    #[test]
    fn test_empty_distribution() {
        assert_eq!(resultant_vector(&[0.0; 16]).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_quadrants() {
        // NE + SE pull due east
        let mut dist = [0.0; 16];
        dist[CardinalDirection::NE.index()] = 10.0;
        dist[CardinalDirection::SE.index()] = 10.0;
        let (rdp, rdd) = resultant_vector(&dist).unwrap();
        assert!((rdp - 2.0 * 10.0 * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((rdd - 90.0).abs() < 1e-9);

        // SW + NW pull due west
        let mut dist = [0.0; 16];
        dist[CardinalDirection::SW.index()] = 5.0;
        dist[CardinalDirection::NW.index()] = 5.0;
        let (_, rdd) = resultant_vector(&dist).unwrap();
        assert!((rdd - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio() {
        let mut dist = single(CardinalDirection::S, 30.0);
        dist[CardinalDirection::N.index()] = 10.0;
        let r = resultant(&dist, Some(40.0)).unwrap();
        assert!((r.rdp() - 20.0).abs() < 1e-9);
        assert!((r.rdd() - 180.0).abs() < 1e-9);
        assert!((r.ratio().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_above_one_is_kept() {
        let r = resultant(&single(CardinalDirection::W, 50.0), Some(25.0)).unwrap();
        assert!((r.ratio().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let dist = single(CardinalDirection::N, 1.0);
        assert!(resultant(&dist, Some(0.0)).is_err());
        assert!(resultant(&dist, Some(-3.0)).is_err());
        assert!(resultant(&dist, Some(f64::NAN)).is_err());
        assert!(resultant_vector(&single(CardinalDirection::E, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_transport_bearing() {
        let r = ResultantDrift::Vector { rdp: 1.0, rdd: 270.0 };
        assert_eq!(r.transport_bearing(), 90.0);
        let r = ResultantDrift::Vector { rdp: 1.0, rdd: 90.0 };
        assert_eq!(r.transport_bearing(), 270.0);
        let r = ResultantDrift::Vector { rdp: 1.0, rdd: 180.0 };
        assert_eq!(r.transport_bearing(), 0.0);
    }

    #[test]
    fn test_area_resultant() {
        let bins = SpeedBins::new(vec![0.0, 100.0]).unwrap();
        let law = DriftPotential::new(6.0);
        let area = AreaDriftPotential::from_cells(
            &bins,
            &law,
            |_, _| 50.0,
            |dir, _| (dir == CardinalDirection::SSW).then_some(16.0),
        );
        let r = area.resultant().unwrap();
        assert!((r.rdd() - CardinalDirection::SSW.bearing()).abs() < 1e-9);
        assert!((r.ratio().unwrap() - 1.0).abs() < 1e-12);

        let calm = AreaDriftPotential::from_cells(&bins, &law, |_, _| 0.0, |_, _| None);
        assert_eq!(calm.resultant().unwrap(), ResultantDrift::Vector { rdp: 0.0, rdd: 0.0 });
    }
}
