//! # aeolian-rs
//!
//! Wind rose statistics for aeolian sediment transport.
//!
//! This crate provides the building blocks of a drift potential analysis:
//! - Cardinal directions, calendar periods and speed bins
//! - Time fraction of a record (decimal arithmetic)
//! - Drift potential law (Fryberg and Dean, 1979), per record and per bin
//! - N-summary occurrence tables with margins and cell statistics
//! - Period × direction aggregation
//! - Resultant drift potential and direction (RDP, RDD, RDP/DP)
//! - Wind profile height adjustment and unit conversion
//! - Wind record file reading and result table writing

pub mod analysis;
pub mod binning;
pub mod conversions;
mod decimal;
pub mod drift;
pub mod error;
pub mod io;
pub mod records;
pub mod summary;
pub mod types;

// Re-export main types for convenience
pub use decimal::round_half_even;
pub use error::{Result, WindRoseError};
pub use records::{WindRecord, WindRecords};
pub use types::{
    CardinalDirection, DEFAULT_SPEED_EDGES, MPS_PER_KNOT, Month, PeriodKey, PeriodKind, Season,
    SpeedBins, SpeedInterval, SpeedUnit, WindDirection,
};

// Drift potential pipeline
pub use drift::{
    AreaDriftPotential, DpReference, DriftPotential, DriftPotentialTable, PeriodDriftRow,
    PeriodResultant, ResultantDrift, aggregate, drift_potential, resultant, resultant_vector,
    sum_dp, time_fraction,
};
pub use summary::{CellStatistics, NSummaryConfig, NSummaryTable, n_summary};

// Supporting conversions
pub use binning::{bin_labels, bin_timestamps};
pub use conversions::{
    HeightAdjustment, degrees_to_cardinal, knots_to_mps, mps_to_knots, wind_log_law,
    wind_power_law,
};

// Pipeline and I/O
pub use analysis::{WindRoseAnalysis, WindRoseConfig, WindRoseReport};
pub use io::{WindFile, WindFileError, read_wind_file};
