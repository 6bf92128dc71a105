//! Drift potential from wind speed (Fryberg and Dean, 1979).
//!
//! # Weighting law
//!
//! ```text
//! DP = t · V² · (V − Vt)
//! ```
//!
//! where:
//! - V = wind speed (knots or m/s, same unit as Vt)
//! - Vt = impact threshold speed keeping sand in saltation
//! - t = time the wind blew, as a fraction of the record
//!
//! Winds below the threshold give a negative weight, which is clamped to
//! zero unless explicitly requested otherwise.

use crate::types::{CardinalDirection, SpeedBins, SpeedUnit};

/// Weighting factor `V² (V − Vt)` for a single speed.
#[inline]
pub fn weighting_factor(speed: f64, threshold: f64) -> f64 {
    speed * speed * (speed - threshold)
}

/// Per-record drift potential.
///
/// Returns one value per input speed. A speed of 0 always yields 0.
/// A non-positive `v_thresh` is accepted as given; it is the caller's
/// responsibility to supply a physically meaningful threshold.
///
/// # Example
///
/// ```
/// use aeolian_rs::drift::drift_potential;
///
/// let dp = drift_potential(&[0.0, 3.0, 6.0, 10.0, 20.0], 1.0, 6.0, true);
/// assert_eq!(dp, vec![0.0, 0.0, 0.0, 400.0, 5600.0]);
/// ```
pub fn drift_potential(speeds: &[f64], t: f64, v_thresh: f64, remove_negatives: bool) -> Vec<f64> {
    DriftPotential::new(v_thresh)
        .with_remove_negatives(remove_negatives)
        .compute(speeds, t)
}

/// Drift potential law configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftPotential {
    /// Impact threshold speed, same unit as the speeds it is applied to.
    pub threshold: f64,
    /// Clamp negative values (sub-threshold winds) to zero.
    pub remove_negatives: bool,
}

impl Default for DriftPotential {
    fn default() -> Self {
        Self::knots()
    }
}

impl DriftPotential {
    /// Law with the given threshold, clamping negatives.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            remove_negatives: true,
        }
    }

    /// Threshold of 12 knots, for speeds recorded in knots at 10 m.
    pub fn knots() -> Self {
        Self::for_unit(SpeedUnit::Knots)
    }

    /// Threshold of 6 m/s, for speeds recorded in m/s at 10 m.
    pub fn meters_per_second() -> Self {
        Self::for_unit(SpeedUnit::MetersPerSecond)
    }

    /// Default threshold for a unit.
    pub fn for_unit(unit: SpeedUnit) -> Self {
        Self::new(unit.default_threshold())
    }

    /// Set the threshold speed.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set whether negative values are clamped to zero.
    pub fn with_remove_negatives(mut self, remove_negatives: bool) -> Self {
        self.remove_negatives = remove_negatives;
        self
    }

    /// Drift potential for a single speed with time weight `t`.
    #[inline]
    pub fn evaluate(&self, speed: f64, t: f64) -> f64 {
        let dp = t * weighting_factor(speed, self.threshold);
        // zero comparison also folds -0.0 from calm records
        if dp == 0.0 || (self.remove_negatives && dp < 0.0) {
            0.0
        } else {
            dp
        }
    }

    /// Drift potential for every speed, aligned 1:1 with the input.
    pub fn compute(&self, speeds: &[f64], t: f64) -> Vec<f64> {
        speeds.iter().map(|&v| self.evaluate(v, t)).collect()
    }

    /// Parallel version of [`DriftPotential::compute`].
    #[cfg(feature = "parallel")]
    pub fn compute_parallel(&self, speeds: &[f64], t: f64) -> Vec<f64> {
        use rayon::prelude::*;

        speeds.par_iter().map(|&v| self.evaluate(v, t)).collect()
    }
}

/// Drift potential over a direction × speed-bin grid.
///
/// Each cell holds `T · V̄² (V̄ − Vt) / 100`, where `T` is the cell's
/// occurrence percentage and `V̄` the mean speed of its observations.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaDriftPotential {
    bins: SpeedBins,
    /// Row per direction (clockwise from N), column per speed bin
    values: [Vec<f64>; 16],
}

impl AreaDriftPotential {
    /// Build the surface from per-cell mean speeds and occurrence percentages.
    ///
    /// `mean_speed` returns `None` for empty cells, which contribute zero.
    pub(crate) fn from_cells(
        bins: &SpeedBins,
        law: &DriftPotential,
        percentage: impl Fn(CardinalDirection, usize) -> f64,
        mean_speed: impl Fn(CardinalDirection, usize) -> Option<f64>,
    ) -> Self {
        let values = CardinalDirection::ALL.map(|dir| {
            (0..bins.len())
                .map(|bin| {
                    let mean = mean_speed(dir, bin).unwrap_or(0.0);
                    law.evaluate(mean, percentage(dir, bin)) / 100.0
                })
                .collect::<Vec<f64>>()
        });
        Self {
            bins: bins.clone(),
            values,
        }
    }

    /// Speed bins defining the columns.
    pub fn bins(&self) -> &SpeedBins {
        &self.bins
    }

    /// Value of one cell.
    pub fn get(&self, direction: CardinalDirection, bin: usize) -> f64 {
        self.values[direction.index()][bin]
    }

    /// Row of one direction.
    pub fn row(&self, direction: CardinalDirection) -> &[f64] {
        &self.values[direction.index()]
    }

    /// Drift potential summed across speed bins for every direction.
    pub fn directional_totals(&self) -> [f64; 16] {
        self.values.each_ref().map(|row| row.iter().sum())
    }

    /// Sum over the whole surface.
    pub fn total(&self) -> f64 {
        self.directional_totals().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let dp = drift_potential(&[0.0, 3.0, 6.0, 10.0, 20.0], 1.0, 6.0, true);
        assert_eq!(dp, vec![0.0, 0.0, 0.0, 400.0, 5600.0]);
    }

    #[test]
    fn test_calm_is_positive_zero() {
        for remove_negatives in [true, false] {
            let law = DriftPotential::meters_per_second().with_remove_negatives(remove_negatives);
            let dp = law.evaluate(0.0, 1.0);
            assert_eq!(dp, 0.0);
            assert!(dp.is_sign_positive());
        }
        assert!(DriftPotential::knots().evaluate(5.0, 1.0).is_sign_positive());
    }

    #[test]
    fn test_negatives_kept_when_requested() {
        let dp = drift_potential(&[0.0, 3.0, 10.0], 0.5, 6.0, false);
        assert_eq!(dp, vec![0.0, 0.5 * 9.0 * -3.0, 0.5 * 100.0 * 4.0]);
    }

    #[test]
    fn test_time_weight_scales_linearly() {
        let law = DriftPotential::meters_per_second();
        let full = law.compute(&[8.0, 14.0], 1.0);
        let part = law.compute(&[8.0, 14.0], 0.25);
        for (f, p) in full.iter().zip(part.iter()) {
            assert!((p - 0.25 * f).abs() < 1e-12);
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(DriftPotential::knots().threshold, 12.0);
        assert_eq!(DriftPotential::meters_per_second().threshold, 6.0);
        assert!(DriftPotential::default().remove_negatives);
        assert_eq!(DriftPotential::knots().with_threshold(10.0).threshold, 10.0);
    }

    #[test]
    fn test_area_surface_from_cells() {
        let bins = SpeedBins::new(vec![0.0, 10.0, 20.0]).unwrap();
        let law = DriftPotential::new(6.0);
        let area = AreaDriftPotential::from_cells(
            &bins,
            &law,
            |dir, bin| if dir == CardinalDirection::E && bin == 1 { 50.0 } else { 10.0 },
            |dir, bin| match (dir, bin) {
                (CardinalDirection::E, 1) => Some(16.0),
                (CardinalDirection::E, 0) => Some(4.0),
                _ => None,
            },
        );

        // 50 % * 16² * (16 - 6) / 100
        assert!((area.get(CardinalDirection::E, 1) - 1280.0).abs() < 1e-9);
        // sub-threshold mean clamps to zero
        assert_eq!(area.get(CardinalDirection::E, 0), 0.0);
        // empty cells contribute nothing
        assert_eq!(area.row(CardinalDirection::N), &[0.0, 0.0]);
        assert!((area.total() - 1280.0).abs() < 1e-9);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let speeds: Vec<f64> = (0..1000).map(|i| (i % 40) as f64 * 0.7).collect();
        let law = DriftPotential::knots();
        assert_eq!(law.compute(&speeds, 0.01), law.compute_parallel(&speeds, 0.01));
    }
}
