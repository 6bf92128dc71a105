//! In-memory wind record series.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{Result, WindRoseError, ensure_same_len};
use crate::types::{CardinalDirection, WindDirection};

/// A single wind observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindRecord {
    /// Observation time
    pub timestamp: NaiveDateTime,
    /// Wind speed, non-negative, in the series' unit
    pub speed: f64,
    /// Wind direction as recorded
    pub direction: WindDirection,
}

impl WindRecord {
    /// Create a record.
    pub fn new(timestamp: NaiveDateTime, speed: f64, direction: impl Into<WindDirection>) -> Self {
        Self {
            timestamp,
            speed,
            direction: direction.into(),
        }
    }

    /// Create a record with a direction in degrees.
    pub fn from_degrees(timestamp: NaiveDateTime, speed: f64, degrees: f64) -> Self {
        Self::new(timestamp, speed, WindDirection::Degrees(degrees))
    }

    /// Whether the record is calm (zero speed).
    pub fn is_calm(&self) -> bool {
        self.speed == 0.0
    }
}

/// Validated, ordered collection of wind records.
///
/// Every speed is finite and non-negative. Records are kept in the order
/// given; only the time-fraction estimate depends on that order.
#[derive(Clone, Debug, Default)]
pub struct WindRecords {
    records: Vec<WindRecord>,
    /// Optional station name
    pub name: Option<String>,
}

impl WindRecords {
    /// Create a series from records.
    ///
    /// # Errors
    /// `InvalidSpeed` for the first negative or non-finite speed.
    pub fn new(records: Vec<WindRecord>) -> Result<Self> {
        validate_speeds(records.iter().map(|r| r.speed))?;
        Ok(Self {
            records,
            name: None,
        })
    }

    /// Create a series from parallel columns.
    ///
    /// # Errors
    /// `LengthMismatch` if the columns differ in length, `InvalidSpeed`
    /// for a negative or non-finite speed.
    pub fn from_columns(
        timestamps: &[NaiveDateTime],
        speeds: &[f64],
        directions: &[WindDirection],
    ) -> Result<Self> {
        ensure_same_len(timestamps.len(), speeds.len())?;
        ensure_same_len(timestamps.len(), directions.len())?;

        let records = timestamps
            .iter()
            .zip(speeds)
            .zip(directions)
            .map(|((&timestamp, &speed), &direction)| WindRecord {
                timestamp,
                speed,
                direction,
            })
            .collect();
        Self::new(records)
    }

    /// Attach a station name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Access the underlying records.
    pub fn records(&self) -> &[WindRecord] {
        &self.records
    }

    /// Timestamps as a vector.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.records.iter().map(|r| r.timestamp).collect()
    }

    /// Speeds as a vector.
    pub fn speeds(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.speed).collect()
    }

    /// Raw directions as a vector.
    pub fn directions(&self) -> Vec<WindDirection> {
        self.records.iter().map(|r| r.direction).collect()
    }

    /// Directions resolved to cardinal labels.
    ///
    /// # Errors
    /// `InvalidDirection` naming the first record that cannot be resolved.
    pub fn cardinal_directions(&self) -> Result<Vec<CardinalDirection>> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.direction.to_cardinal().map_err(|e| match e {
                    WindRoseError::InvalidDirection(msg) => {
                        WindRoseError::InvalidDirection(format!("record {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Span between the first and last record, `None` if empty.
    pub fn time_span(&self) -> Option<TimeDelta> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(last.timestamp - first.timestamp)
    }

    /// Number of calm records.
    pub fn calm_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_calm()).count()
    }

    /// Replace the speed column, keeping timestamps and directions.
    ///
    /// # Errors
    /// `LengthMismatch` or `InvalidSpeed` as for [`WindRecords::new`].
    pub fn with_speeds(&self, speeds: &[f64]) -> Result<Self> {
        ensure_same_len(self.records.len(), speeds.len())?;
        validate_speeds(speeds.iter().copied())?;
        let records = self
            .records
            .iter()
            .zip(speeds)
            .map(|(r, &speed)| WindRecord { speed, ..*r })
            .collect();
        Ok(Self {
            records,
            name: self.name.clone(),
        })
    }
}

/// Reject negative or non-finite speeds, reporting the first offender.
pub(crate) fn validate_speeds(speeds: impl IntoIterator<Item = f64>) -> Result<()> {
    for (index, value) in speeds.into_iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(WindRoseError::InvalidSpeed { index, value });
        }
    }
    Ok(())
}
