//! Descriptive statistics for one (direction, speed-bin) cell.

/// Neumaier compensated sum.
///
/// Keeps the low-order bits a naive running sum loses, which matters when
/// summing many small per-record drift potentials into one large total.
pub fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Summary of raw speeds falling into one cell.
///
/// Fields that are undefined for the cell's sample size are `None`:
/// everything but `count` for an empty cell, `std_dev` for a single value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellStatistics {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Median (average of the middle pair for even counts)
    pub median: Option<f64>,
    /// Sample standard deviation (n − 1 denominator)
    pub std_dev: Option<f64>,
    /// Largest observation
    pub max: Option<f64>,
}

impl CellStatistics {
    /// Compute statistics for a set of speeds.
    ///
    /// Speeds are assumed finite; the N-summary builder validates them first.
    pub fn from_speeds(speeds: &[f64]) -> Self {
        let n = speeds.len();
        if n == 0 {
            return Self::default();
        }

        let mean = compensated_sum(speeds) / n as f64;

        let std_dev = (n >= 2).then(|| {
            let ss: f64 = speeds.iter().map(|&v| (v - mean) * (v - mean)).sum();
            (ss / (n - 1) as f64).sqrt()
        });

        let mut sorted = speeds.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        Self {
            count: n,
            mean: Some(mean),
            median: Some(median),
            std_dev,
            max: Some(sorted[n - 1]),
        }
    }

    /// Whether the cell holds no observations.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
