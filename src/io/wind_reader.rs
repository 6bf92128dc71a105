//! Wind record file reader and writer.
//!
//! # File Formats
//!
//! ## Whitespace-separated text
//!
//! ```text
//! # station: Walvis Bay
//! # units: knots
//! # height: 2.5
//! 2020-01-01 00:00:00 12.0 270
//! 2020-01-01 01:00:00 14.5 WNW
//! ```
//!
//! ## CSV with header
//!
//! ```text
//! timestamp,speed,direction
//! 2020-01-01T00:00:00Z,12.0,270
//! 2020-01-01T01:00:00Z,14.5,WNW
//! ```
//!
//! Directions are bearings in degrees or cardinal labels. Speeds are in the
//! unit named by the `units` metadata (knots if absent).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::debug;

use crate::error::WindRoseError;
use crate::records::{WindRecord, WindRecords};
use crate::types::{SpeedUnit, WindDirection};

/// Error type for wind file operations.
#[derive(Debug, Error)]
pub enum WindFileError {
    /// IO error reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// File holds no usable data
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Parsed values failed validation
    #[error("Invalid records: {0}")]
    Records(#[from] WindRoseError),
}

impl WindFileError {
    fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}

/// Parsed wind record file.
#[derive(Clone, Debug)]
pub struct WindFile {
    /// Records in file order
    pub records: WindRecords,
    /// Unit of the speed column
    pub units: SpeedUnit,
    /// Recorder height in metres, if given
    pub height: Option<f64>,
    /// Station name, if given
    pub station: Option<String>,
    /// Original file path
    pub source_file: Option<String>,
}

impl WindFile {
    /// Wrap records with default metadata (knots, no height).
    pub fn from_records(records: WindRecords) -> Self {
        let station = records.name.clone();
        Self {
            records,
            units: SpeedUnit::default(),
            height: None,
            station,
            source_file: None,
        }
    }

    /// Set the speed unit.
    pub fn with_units(mut self, units: SpeedUnit) -> Self {
        self.units = units;
        self
    }

    /// Set the recorder height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

/// Read a wind record file.
pub fn read_wind_file(path: &Path) -> Result<WindFile, WindFileError> {
    let file = File::open(path)?;
    let mut data = parse_wind_records(BufReader::new(file))?;
    data.source_file = Some(path.to_string_lossy().to_string());
    Ok(data)
}

/// Parse wind records from any buffered reader.
///
/// Line numbers in errors are 1-based.
pub fn parse_wind_records<R: BufRead>(reader: R) -> Result<WindFile, WindFileError> {
    let mut metadata: HashMap<String, (usize, String)> = HashMap::new();
    let mut records: Vec<WindRecord> = Vec::new();
    let mut header_seen = false;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_no = line_num + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.trim().split_once(':') {
                metadata.insert(
                    key.trim().to_lowercase(),
                    (line_no, value.trim().to_string()),
                );
            }
            continue;
        }

        let fields: Vec<&str> = if line.contains(',') {
            line.split(',').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        // "YYYY-MM-DD HH:MM:SS" splits into two whitespace fields
        let (stamp, values) = if fields.len() >= 4 && fields[1].contains(':') {
            (format!("{} {}", fields[0], fields[1]), &fields[2..])
        } else {
            (fields[0].to_string(), &fields[1..])
        };

        // a header row carries a non-numeric speed column
        let looks_like_header = values.first().is_none_or(|v| v.parse::<f64>().is_err());

        let timestamp = match parse_timestamp(&stamp) {
            Ok(ts) => ts,
            Err(_) if records.is_empty() && !header_seen && looks_like_header => {
                header_seen = true;
                continue;
            }
            Err(e) => return Err(WindFileError::parse(line_no, e)),
        };

        if values.len() < 2 {
            return Err(WindFileError::parse(
                line_no,
                format!("expected timestamp, speed and direction, got {} fields", fields.len()),
            ));
        }

        let speed: f64 = values[0]
            .parse()
            .map_err(|e| WindFileError::parse(line_no, format!("speed '{}': {e}", values[0])))?;
        let direction: WindDirection = values[1]
            .parse()
            .map_err(|e| WindFileError::parse(line_no, format!("direction: {e}")))?;

        records.push(WindRecord::new(timestamp, speed, direction));
    }

    if records.is_empty() {
        return Err(WindFileError::InvalidFormat(
            "No data rows found".to_string(),
        ));
    }

    let units = match metadata.get("units") {
        Some((line, value)) => value
            .parse::<SpeedUnit>()
            .map_err(|e| WindFileError::parse(*line, e.to_string()))?,
        None => SpeedUnit::default(),
    };
    let height = match metadata.get("height") {
        Some((line, value)) => Some(
            value
                .trim_end_matches('m')
                .trim()
                .parse::<f64>()
                .map_err(|e| WindFileError::parse(*line, format!("height '{value}': {e}")))?,
        ),
        None => None,
    };
    let station = metadata.get("station").map(|(_, name)| name.clone());

    debug!(records = records.len(), %units, ?height, "Parsed wind records");

    let mut records = WindRecords::new(records)?;
    if let Some(name) = &station {
        records = records.with_name(name.clone());
    }

    Ok(WindFile {
        records,
        units,
        height,
        station,
        source_file: None,
    })
}

/// Parse an ISO-like timestamp.
///
/// Accepts `T` or a space between date and time, optional seconds with
/// fractional part, and a trailing `Z`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    let trimmed = s.trim().trim_end_matches('Z');
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| format!("unable to parse timestamp '{s}'"))
}

/// Write records in the whitespace text format with metadata headers.
pub fn write_wind_file(path: &Path, data: &WindFile) -> Result<(), WindFileError> {
    let mut file = File::create(path)?;

    writeln!(file, "# Wind records")?;
    if let Some(ref station) = data.station {
        writeln!(file, "# station: {station}")?;
    }
    writeln!(file, "# units: {}", data.units)?;
    if let Some(height) = data.height {
        writeln!(file, "# height: {height}")?;
    }
    writeln!(file, "# columns: timestamp speed direction")?;

    for record in data.records.records() {
        let direction = match record.direction {
            WindDirection::Degrees(deg) => deg.to_string(),
            WindDirection::Cardinal(dir) => dir.to_string(),
        };
        writeln!(
            file,
            "{} {} {}",
            record.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            record.speed,
            direction
        )?;
    }

    Ok(())
}
