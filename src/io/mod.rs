//! Reading wind records and writing result tables.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use aeolian_rs::io::{read_wind_file, save_resultants};
//! use aeolian_rs::analysis::{WindRoseAnalysis, WindRoseConfig};
//!
//! let data = read_wind_file(Path::new("station.txt")).unwrap();
//! let config = WindRoseConfig::for_unit(data.units);
//! let report = WindRoseAnalysis::new(config).run(&data.records).unwrap();
//! save_resultants(Path::new("resultants.csv"), &report.resultants).unwrap();
//! ```

mod report_writer;
mod wind_reader;

pub use report_writer::{save_n_summary, save_resultants, write_n_summary, write_resultants};
pub use wind_reader::{
    WindFile, WindFileError, parse_timestamp, parse_wind_records, read_wind_file, write_wind_file,
};
