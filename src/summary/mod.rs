//! N-summary tables and per-cell statistics.
//!
//! # Example
//!
//! ```
//! use aeolian_rs::summary::n_summary;
//! use aeolian_rs::types::CardinalDirection;
//!
//! let speeds = [0.0, 5.0, 12.0, 18.0];
//! let dirs = [CardinalDirection::N, CardinalDirection::N, CardinalDirection::E, CardinalDirection::E];
//! let table = n_summary(&speeds, &dirs).unwrap();
//! assert_eq!(table.calm_percentage(), 25.0);
//! assert_eq!(table.direction_total(CardinalDirection::E), 50.0);
//! ```

mod n_summary;
mod statistics;

pub use n_summary::{NSummaryConfig, NSummaryTable, n_summary};
pub use statistics::{CellStatistics, compensated_sum};
