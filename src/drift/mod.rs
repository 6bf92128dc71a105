//! Drift potential pipeline.
//!
//! Per-record drift potential is weighted by the fraction of the record
//! span each observation represents, grouped by calendar period and
//! direction, and reduced to a resultant vector per period.
//!
//! ```text
//! records ──► time_fraction ──► DriftPotential::compute ──► aggregate
//!                                                             │
//!                                              resultants ◄───┘
//! ```

mod aggregate;
mod potential;
mod resultant;
mod time_fraction;

pub use aggregate::{DriftPotentialTable, PeriodDriftRow, PeriodResultant, aggregate, sum_dp};
pub use potential::{AreaDriftPotential, DriftPotential, drift_potential, weighting_factor};
pub use resultant::{DpReference, ResultantDrift, resultant, resultant_vector};
pub use time_fraction::time_fraction;
