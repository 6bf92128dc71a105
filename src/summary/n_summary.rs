//! N-summary occurrence table (Fryberg, 1979).
//!
//! Rows are the 16 cardinal directions plus a Calm row, columns are the speed
//! bins plus a Total % column. Each directional cell holds the percentage of
//! all records that blew from that direction within that speed class.
//!
//! # Margins
//!
//! ```text
//!            bin_0 .. bin_k   Total %
//! N          p_N,0 .. p_N,k   Σ_j p_N,j
//! ..
//! NNW        ..               ..
//! Calm                         p_calm
//! Total %    Σ_d p_d,0 ..      Σ Total % column
//! ```
//!
//! Percentages are computed unrounded and every published value is rounded
//! half-to-even to the configured precision, so the margins agree with each
//! other to within rounding.

use tracing::debug;

use super::statistics::CellStatistics;
use crate::decimal::round_half_even;
use crate::drift::{AreaDriftPotential, DriftPotential};
use crate::error::{Result, WindRoseError, ensure_same_len};
use crate::records::validate_speeds;
use crate::types::{CardinalDirection, SpeedBins};

/// Configuration for building an N-summary table.
#[derive(Clone, Debug, PartialEq)]
pub struct NSummaryConfig {
    /// Speed classes for the columns
    pub bins: SpeedBins,
    /// Number of decimals in published percentages
    pub precision: u32,
}

impl Default for NSummaryConfig {
    fn default() -> Self {
        Self {
            bins: SpeedBins::default(),
            precision: 1,
        }
    }
}

impl NSummaryConfig {
    /// Set the speed bins.
    pub fn with_bins(mut self, bins: SpeedBins) -> Self {
        self.bins = bins;
        self
    }

    /// Set the rounding precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

/// Direction × speed-bin occurrence table with margins and cell statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct NSummaryTable {
    total_records: usize,
    calm_records: usize,
    bins: SpeedBins,
    precision: u32,
    percentages: [Vec<f64>; 16],
    direction_totals: [f64; 16],
    calm_percentage: f64,
    bin_totals: Vec<f64>,
    grand_total: f64,
    statistics: [Vec<CellStatistics>; 16],
}

impl NSummaryTable {
    /// Build the table from parallel speed and direction columns.
    ///
    /// # Errors
    /// - `EmptyInput` if there are no records
    /// - `LengthMismatch` if the columns differ in length
    /// - `InvalidSpeed` for a negative or non-finite speed
    /// - `SpeedOutOfRange` for a non-calm speed that falls in no bin
    pub fn build(
        speeds: &[f64],
        directions: &[CardinalDirection],
        config: &NSummaryConfig,
    ) -> Result<Self> {
        if speeds.is_empty() {
            return Err(WindRoseError::EmptyInput);
        }
        ensure_same_len(speeds.len(), directions.len())?;
        validate_speeds(speeds.iter().copied())?;

        let bins = &config.bins;
        let n_bins = bins.len();

        let mut cells: [Vec<Vec<f64>>; 16] =
            std::array::from_fn(|_| vec![Vec::new(); n_bins]);
        let mut calm_records = 0usize;

        for (index, (&speed, &direction)) in speeds.iter().zip(directions).enumerate() {
            if speed == 0.0 {
                calm_records += 1;
                continue;
            }
            let bin = bins
                .bin_index(speed)
                .ok_or(WindRoseError::SpeedOutOfRange { index, value: speed })?;
            cells[direction.index()][bin].push(speed);
        }

        let total = speeds.len() as f64;
        let percent = |count: usize| count as f64 / total * 100.0;

        let raw: [Vec<f64>; 16] = cells
            .each_ref()
            .map(|row| row.iter().map(|cell| percent(cell.len())).collect());
        let raw_calm = percent(calm_records);

        let raw_direction_totals: [f64; 16] = raw.each_ref().map(|row| row.iter().sum());
        let raw_bin_totals: Vec<f64> = (0..n_bins)
            .map(|bin| raw.iter().map(|row| row[bin]).sum())
            .collect();
        let raw_grand_total = raw_direction_totals.iter().sum::<f64>() + raw_calm;

        let precision = config.precision;
        let round = |v: f64| round_half_even(v, precision);

        let table = Self {
            total_records: speeds.len(),
            calm_records,
            bins: bins.clone(),
            precision,
            percentages: raw.map(|row| row.into_iter().map(round).collect()),
            direction_totals: raw_direction_totals.map(round),
            calm_percentage: round(raw_calm),
            bin_totals: raw_bin_totals.into_iter().map(round).collect(),
            grand_total: round(raw_grand_total),
            statistics: cells.map(|row| {
                row.iter()
                    .map(|speeds| CellStatistics::from_speeds(speeds))
                    .collect()
            }),
        };

        debug!(
            records = table.total_records,
            calm = table.calm_records,
            bins = n_bins,
            grand_total = table.grand_total,
            "Built N-summary table"
        );

        Ok(table)
    }

    /// Number of records summarised, including calms.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Number of zero-speed records.
    pub fn calm_records(&self) -> usize {
        self.calm_records
    }

    /// Speed bins defining the columns.
    pub fn bins(&self) -> &SpeedBins {
        &self.bins
    }

    /// Decimals kept in published percentages.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Occurrence percentage of one cell.
    pub fn percentage(&self, direction: CardinalDirection, bin: usize) -> f64 {
        self.percentages[direction.index()][bin]
    }

    /// Occurrence percentages of one direction, one per bin.
    pub fn row(&self, direction: CardinalDirection) -> &[f64] {
        &self.percentages[direction.index()]
    }

    /// Total % column entry for a direction.
    pub fn direction_total(&self, direction: CardinalDirection) -> f64 {
        self.direction_totals[direction.index()]
    }

    /// Total % column, clockwise from N.
    pub fn direction_totals(&self) -> &[f64; 16] {
        &self.direction_totals
    }

    /// Calm row percentage.
    pub fn calm_percentage(&self) -> f64 {
        self.calm_percentage
    }

    /// Total % row, one per bin.
    pub fn bin_totals(&self) -> &[f64] {
        &self.bin_totals
    }

    /// Corner cell: sum of the Total % column including Calm.
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Raw-speed statistics of one cell.
    pub fn statistics(&self, direction: CardinalDirection, bin: usize) -> &CellStatistics {
        &self.statistics[direction.index()][bin]
    }

    /// Σ(Total % row) + Calm.
    pub fn row_total_sum(&self) -> f64 {
        self.bin_totals.iter().sum::<f64>() + self.calm_percentage
    }

    /// Σ(Total % column) including Calm.
    pub fn column_total_sum(&self) -> f64 {
        self.direction_totals.iter().sum::<f64>() + self.calm_percentage
    }

    /// Bin-weighted drift potential surface.
    ///
    /// Each cell uses its published percentage and the mean of its raw speeds.
    pub fn area_drift_potential(&self, law: &DriftPotential) -> AreaDriftPotential {
        AreaDriftPotential::from_cells(
            &self.bins,
            law,
            |dir, bin| self.percentage(dir, bin),
            |dir, bin| self.statistics(dir, bin).mean,
        )
    }
}

/// Build an N-summary with default bins and one decimal of precision.
pub fn n_summary(speeds: &[f64], directions: &[CardinalDirection]) -> Result<NSummaryTable> {
    NSummaryTable::build(speeds, directions, &NSummaryConfig::default())
}
