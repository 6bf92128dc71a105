//! Wind speed classes for the N-summary table.

use std::fmt;

use super::units::SpeedUnit;
use crate::error::{Result, WindRoseError};

/// Default bin edges in knots (Fryberg and Dean, 1979).
pub const DEFAULT_SPEED_EDGES: [f64; 12] = [
    0.0,
    4.0,
    7.0,
    11.0,
    17.0,
    22.0,
    28.0,
    34.0,
    41.0,
    48.0,
    55.0,
    f64::INFINITY,
];

/// A single right-closed interval `(lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedInterval {
    pub lower: f64,
    pub upper: f64,
}

impl SpeedInterval {
    /// Whether `speed` lies in `(lower, upper]`.
    #[inline]
    pub fn contains(&self, speed: f64) -> bool {
        speed > self.lower && speed <= self.upper
    }
}

impl fmt::Display for SpeedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper.is_infinite() {
            write!(f, "({}, inf]", self.lower)
        } else {
            write!(f, "({}, {}]", self.lower, self.upper)
        }
    }
}

/// Ascending, non-overlapping speed classes.
///
/// The first edge is always 0 and intervals are right-closed, so a calm
/// record (speed exactly 0) falls into no class and is tracked separately.
/// The last edge may be finite: a speed above it belongs to no class and
/// is rejected as `SpeedOutOfRange` when the table is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedBins {
    edges: Vec<f64>,
}

impl SpeedBins {
    /// Build bins from edges.
    ///
    /// # Errors
    /// `InvalidBins` if fewer than two edges are given, an edge is NaN,
    /// the first edge is not 0, or the edges are not strictly ascending.
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(WindRoseError::InvalidBins(format!(
                "need at least 2 edges, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| e.is_nan()) {
            return Err(WindRoseError::InvalidBins("edges contain NaN".to_string()));
        }
        if edges[0] != 0.0 {
            return Err(WindRoseError::InvalidBins(format!(
                "first edge must be 0, got {}",
                edges[0]
            )));
        }
        if let Some(pair) = edges.windows(2).find(|w| w[1] <= w[0]) {
            return Err(WindRoseError::InvalidBins(format!(
                "edges must be strictly ascending ({} followed by {})",
                pair[0], pair[1]
            )));
        }
        Ok(Self { edges })
    }

    /// Default classes expressed in `unit`.
    ///
    /// The knot edges are scaled by a positive constant, which keeps them
    /// ascending from 0.
    pub fn for_unit(unit: SpeedUnit) -> Self {
        Self {
            edges: SpeedUnit::Knots.convert_all(&DEFAULT_SPEED_EDGES, unit),
        }
    }

    /// The edges as given.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    /// Always false; construction requires at least one interval.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Interval at position `i`.
    pub fn interval(&self, i: usize) -> SpeedInterval {
        SpeedInterval {
            lower: self.edges[i],
            upper: self.edges[i + 1],
        }
    }

    /// All intervals in ascending order.
    pub fn intervals(&self) -> Vec<SpeedInterval> {
        (0..self.len()).map(|i| self.interval(i)).collect()
    }

    /// Index of the interval containing `speed`, if any.
    ///
    /// Uses binary search over the edges: the result is the first edge
    /// not below `speed`, minus one.
    pub fn bin_index(&self, speed: f64) -> Option<usize> {
        if speed.is_nan() || speed <= self.edges[0] || speed > self.edges[self.edges.len() - 1] {
            return None;
        }
        let upper = self.edges.partition_point(|&e| e < speed);
        Some(upper - 1)
    }
}

impl Default for SpeedBins {
    fn default() -> Self {
        Self {
            edges: DEFAULT_SPEED_EDGES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bins() {
        let bins = SpeedBins::default();
        assert_eq!(bins.len(), 11);
        assert_eq!(bins.interval(0).to_string(), "(0, 4]");
        assert_eq!(bins.interval(10).to_string(), "(55, inf]");
    }

    #[test]
    fn test_bin_index_is_right_closed() {
        let bins = SpeedBins::default();
        assert_eq!(bins.bin_index(0.0), None);
        assert_eq!(bins.bin_index(0.1), Some(0));
        assert_eq!(bins.bin_index(4.0), Some(0));
        assert_eq!(bins.bin_index(4.0001), Some(1));
        assert_eq!(bins.bin_index(7.0), Some(1));
        assert_eq!(bins.bin_index(55.0), Some(9));
        assert_eq!(bins.bin_index(500.0), Some(10));
        assert_eq!(bins.bin_index(f64::NAN), None);
    }

    #[test]
    fn test_bounded_last_edge() {
        let bins = SpeedBins::new(vec![0.0, 5.0, 10.0]).unwrap();
        assert_eq!(bins.bin_index(10.0), Some(1));
        assert_eq!(bins.bin_index(10.5), None);
    }

    #[test]
    fn test_invalid_bins() {
        assert!(SpeedBins::new(vec![0.0]).is_err());
        assert!(SpeedBins::new(vec![-1.0, 4.0]).is_err());
        // classes must start at 0 so every positive speed below the top is covered
        assert!(SpeedBins::new(vec![5.0, 10.0, 20.0]).is_err());
        assert!(SpeedBins::new(vec![0.0, 4.0, 4.0]).is_err());
        assert!(SpeedBins::new(vec![0.0, 7.0, 4.0]).is_err());
        assert!(SpeedBins::new(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_bins_for_unit() {
        assert_eq!(SpeedBins::for_unit(SpeedUnit::Knots), SpeedBins::default());

        let mps = SpeedBins::for_unit(SpeedUnit::MetersPerSecond);
        assert_eq!(mps.len(), 11);
        assert_eq!(mps.edges()[0], 0.0);
        assert!((mps.edges()[1] - 4.0 * 1852.0 / 3600.0).abs() < 1e-12);
        assert!(mps.edges()[11].is_infinite());
        assert!(SpeedBins::new(mps.edges().to_vec()).is_ok());
    }

    #[test]
    fn test_bin_index_agrees_with_contains() {
        let bins = SpeedBins::default();
        for speed in [0.5, 3.9, 4.0, 11.0, 11.1, 33.3, 48.0, 60.0] {
            let i = bins.bin_index(speed).unwrap();
            assert!(bins.interval(i).contains(speed), "speed {speed} not in bin {i}");
        }
    }
}
