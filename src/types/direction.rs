//! The 16-point compass rose.
//!
//! Directions are an ordered enumeration running clockwise from North, so
//! sorting and grouping follow compass order rather than label order.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WindRoseError};

/// Angular width of one compass sector in degrees.
pub const SECTOR_WIDTH_DEG: f64 = 22.5;

/// One of the 16 cardinal directions, ordered clockwise from North.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardinalDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CardinalDirection {
    /// Number of compass sectors.
    pub const COUNT: usize = 16;

    /// All directions in clockwise order starting at North.
    pub const ALL: [CardinalDirection; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Position in the clockwise cycle (N = 0, NNW = 15).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at a clockwise position, wrapping modulo 16.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Bearing in degrees clockwise from North.
    #[inline]
    pub fn bearing(self) -> f64 {
        self.index() as f64 * SECTOR_WIDTH_DEG
    }

    /// Bearing in radians clockwise from North.
    #[inline]
    pub fn bearing_radians(self) -> f64 {
        self.bearing().to_radians()
    }

    /// Short label, e.g. `"NNE"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }

    /// Resolve a bearing in degrees to the nearest cardinal direction.
    ///
    /// Any finite angle is accepted and wrapped into [0, 360). Exact sector
    /// boundaries round to the even sector index, and 360° wraps to N.
    ///
    /// # Errors
    /// `InvalidDirection` for NaN or infinite input.
    ///
    /// # Example
    ///
    /// ```
    /// use aeolian_rs::CardinalDirection;
    ///
    /// assert_eq!(CardinalDirection::from_degrees(91.0).unwrap(), CardinalDirection::E);
    /// assert_eq!(CardinalDirection::from_degrees(355.0).unwrap(), CardinalDirection::N);
    /// assert_eq!(CardinalDirection::from_degrees(-22.5).unwrap(), CardinalDirection::NNW);
    /// ```
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(WindRoseError::InvalidDirection(format!(
                "{degrees} is not a finite angle"
            )));
        }
        let angle = degrees.rem_euclid(360.0);
        let sector = (angle / SECTOR_WIDTH_DEG).round_ties_even() as usize;
        Ok(Self::from_index(sector))
    }

    /// Direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + Self::COUNT / 2)
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardinalDirection {
    type Err = WindRoseError;

    /// Parse a label case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WindRoseError::InvalidDirection(format!("unknown label '{wanted}'")))
    }
}

/// Wind direction as recorded: either a bearing or an already resolved label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindDirection {
    /// Bearing in degrees clockwise from North.
    Degrees(f64),
    /// Cardinal label.
    Cardinal(CardinalDirection),
}

impl WindDirection {
    /// Resolve to a cardinal direction.
    pub fn to_cardinal(self) -> Result<CardinalDirection> {
        match self {
            Self::Degrees(deg) => CardinalDirection::from_degrees(deg),
            Self::Cardinal(dir) => Ok(dir),
        }
    }
}

impl From<CardinalDirection> for WindDirection {
    fn from(dir: CardinalDirection) -> Self {
        Self::Cardinal(dir)
    }
}

impl FromStr for WindDirection {
    type Err = WindRoseError;

    /// Numeric strings become `Degrees`, anything else must be a label.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(deg) = s.parse::<f64>() {
            return Ok(Self::Degrees(deg));
        }
        s.parse::<CardinalDirection>().map(Self::Cardinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearings_are_clockwise() {
        assert_eq!(CardinalDirection::N.bearing(), 0.0);
        assert_eq!(CardinalDirection::E.bearing(), 90.0);
        assert_eq!(CardinalDirection::S.bearing(), 180.0);
        assert_eq!(CardinalDirection::W.bearing(), 270.0);
        assert_eq!(CardinalDirection::NNW.bearing(), 337.5);
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, dir) in CardinalDirection::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(CardinalDirection::from_index(i), *dir);
        }
        assert!(CardinalDirection::N < CardinalDirection::NNW);
    }

    #[test]
    fn test_from_degrees_nearest() {
        assert_eq!(CardinalDirection::from_degrees(0.0).unwrap(), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_degrees(10.0).unwrap(), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_degrees(12.0).unwrap(), CardinalDirection::NNE);
        assert_eq!(CardinalDirection::from_degrees(200.0).unwrap(), CardinalDirection::SSW);
        assert_eq!(CardinalDirection::from_degrees(350.0).unwrap(), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_degrees(360.0).unwrap(), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_degrees(720.0 + 90.0).unwrap(), CardinalDirection::E);
    }

    #[test]
    fn test_from_degrees_ties_to_even() {
        // 11.25 sits exactly between N (0) and NNE (1)
        assert_eq!(CardinalDirection::from_degrees(11.25).unwrap(), CardinalDirection::N);
        // 33.75 sits between NNE (1) and NE (2)
        assert_eq!(CardinalDirection::from_degrees(33.75).unwrap(), CardinalDirection::NE);
    }

    #[test]
    fn test_from_degrees_rejects_non_finite() {
        assert!(CardinalDirection::from_degrees(f64::NAN).is_err());
        assert!(CardinalDirection::from_degrees(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("wsw".parse::<CardinalDirection>().unwrap(), CardinalDirection::WSW);
        assert_eq!(" N ".parse::<CardinalDirection>().unwrap(), CardinalDirection::N);
        assert!("NORTH".parse::<CardinalDirection>().is_err());
    }

    #[test]
    fn test_wind_direction_parse() {
        assert_eq!("45".parse::<WindDirection>().unwrap(), WindDirection::Degrees(45.0));
        assert_eq!(
            "SE".parse::<WindDirection>().unwrap(),
            WindDirection::Cardinal(CardinalDirection::SE)
        );
        assert_eq!(
            WindDirection::Degrees(135.0).to_cardinal().unwrap(),
            CardinalDirection::SE
        );
    }

    #[test]
    fn test_opposite() {
        assert_eq!(CardinalDirection::N.opposite(), CardinalDirection::S);
        assert_eq!(CardinalDirection::WNW.opposite(), CardinalDirection::ESE);
    }
}
