//! Wind rose analysis from raw records to resultant drift.
//!
//! # Background
//!
//! Fryberg and Dean (1979) weight each wind observation by the cube-like
//! law `V² (V − Vt)` to estimate its sand-moving capacity. Summing the
//! weighted observations per direction gives the drift potential (DP)
//! distribution; its vector sum is the resultant drift potential (RDP) with
//! direction RDD. The ratio RDP/DP is the directional variability index:
//!
//! | RDP/DP    | Wind regime         |
//! |-----------|---------------------|
//! | > 0.8     | narrow unimodal     |
//! | 0.3 – 0.8 | wide unimodal / bimodal |
//! | < 0.3     | complex / multimodal |
//!
//! # Example
//!
//! ```
//! use aeolian_rs::analysis::{WindRoseAnalysis, WindRoseConfig};
//! use aeolian_rs::records::{WindRecord, WindRecords};
//! use aeolian_rs::types::PeriodKind;
//! use chrono::{NaiveDate, TimeDelta};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let records: Vec<WindRecord> = (0..48)
//!     .map(|h| WindRecord::from_degrees(start + TimeDelta::hours(h), 15.0 + (h % 5) as f64, 45.0))
//!     .collect();
//! let records = WindRecords::new(records).unwrap();
//!
//! let config = WindRoseConfig::knots().with_period(PeriodKind::Monthly);
//! let report = WindRoseAnalysis::new(config).run(&records).unwrap();
//!
//! assert!((report.overall.rdd() - 45.0).abs() < 1e-9);
//! ```

mod wind_rose;

pub use wind_rose::{WindRoseAnalysis, WindRoseConfig, WindRoseReport};
