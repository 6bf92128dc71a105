//! Domain types for wind-rose computations.
//!
//! Categorical quantities are enumerations with a declared order, so
//! sorting and grouping follow domain order (clockwise for directions,
//! calendar order for months and seasons) instead of label order.
//!
//! # Example
//!
//! ```
//! use aeolian_rs::types::{CardinalDirection, Month, PeriodKey, Season, SpeedBins};
//!
//! let dir = CardinalDirection::from_degrees(230.0).unwrap();
//! assert_eq!(dir, CardinalDirection::SW);
//! assert_eq!(dir.bearing(), 225.0);
//!
//! assert_eq!(Month::Dec.season(), Season::Win);
//! assert_eq!(PeriodKey::Month(Month::Mar).bin_label(), "Monthly: Mar");
//!
//! let bins = SpeedBins::default();
//! assert_eq!(bins.bin_index(5.0), Some(1)); // (4, 7]
//! ```

mod direction;
mod period;
mod speed_bins;
mod units;

pub use direction::{CardinalDirection, SECTOR_WIDTH_DEG, WindDirection};
pub use period::{Month, PeriodKey, PeriodKind, Season};
pub use speed_bins::{DEFAULT_SPEED_EDGES, SpeedBins, SpeedInterval};
pub use units::{MPS_PER_KNOT, SpeedUnit};
