//! Error types for wind-rose computations.

use thiserror::Error;

/// Errors raised when input data cannot be turned into a meaningful result.
///
/// Degenerate input (empty series, zero time span, unresolvable directions)
/// is rejected here instead of being propagated as NaN or infinity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindRoseError {
    /// No records were supplied.
    #[error("Input contains no records")]
    EmptyInput,

    /// Parallel columns have different lengths.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Fewer records than the computation requires.
    #[error("Need at least {required} records, got {found}")]
    InsufficientRecords { required: usize, found: usize },

    /// First and last timestamps coincide.
    #[error("Observed time span is zero")]
    ZeroTimeSpan,

    /// Last timestamp precedes the first one.
    #[error("Observed time span is negative ({seconds} s); records are not time-ascending")]
    NegativeTimeSpan { seconds: i64 },

    /// Speed is negative, NaN or infinite.
    #[error("Invalid wind speed {value} at record {index}")]
    InvalidSpeed { index: usize, value: f64 },

    /// Speed lies beyond the last bin edge.
    #[error("Wind speed {value} at record {index} is outside the speed bins")]
    SpeedOutOfRange { index: usize, value: f64 },

    /// Direction cannot be resolved to a cardinal label.
    #[error("Invalid wind direction: {0}")]
    InvalidDirection(String),

    /// Bin edges are not strictly ascending or otherwise unusable.
    #[error("Invalid speed bins: {0}")]
    InvalidBins(String),

    /// A scalar parameter is outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Decimal arithmetic overflowed or produced an unrepresentable value.
    #[error("Decimal arithmetic failed: {0}")]
    DecimalOverflow(String),
}

impl WindRoseError {
    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WindRoseError>;

/// Reject columns whose lengths disagree.
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(WindRoseError::length_mismatch(expected, actual));
    }
    Ok(())
}
