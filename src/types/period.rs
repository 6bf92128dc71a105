//! Calendar periods used to group wind records.
//!
//! Months and seasons are enumerations in calendar order; seasons are
//! meteorological (DJF, MAM, JJA, SON).

use std::fmt;

use chrono::{Datelike, NaiveDateTime};

/// Calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Month from its 1-based number, `None` outside 1..=12.
    pub fn from_number(number: u32) -> Option<Self> {
        (1..=12)
            .contains(&number)
            .then(|| Self::ALL[(number - 1) as usize])
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Three-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Meteorological season containing this month.
    pub fn season(self) -> Season {
        // Dec -> 0, Jan/Feb -> 0, Mar..May -> 1, ...
        Season::ALL[((self.number() % 12) / 3) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meteorological season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    /// December, January, February
    Win,
    /// March, April, May
    Spr,
    /// June, July, August
    Sum,
    /// September, October, November
    Aut,
}

impl Season {
    /// All seasons, winter first.
    pub const ALL: [Season; 4] = [Self::Win, Self::Spr, Self::Sum, Self::Aut];

    /// Three-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Spr => "Spr",
            Self::Sum => "Sum",
            Self::Aut => "Aut",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How records are grouped in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// One group per calendar month (all years pooled).
    Monthly,
    /// One group per meteorological season (all years pooled).
    Seasonal,
    /// One group per calendar year.
    Yearly,
    /// A single group spanning the whole record.
    #[default]
    All,
}

impl PeriodKind {
    /// Prefix used for bin labels.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Seasonal => "Seasonally",
            Self::Yearly => "Yearly",
            Self::All => "All",
        }
    }

    /// Period a timestamp falls into.
    pub fn key_for(self, timestamp: &NaiveDateTime) -> PeriodKey {
        match self {
            Self::Monthly => PeriodKey::Month(month_of(timestamp)),
            Self::Seasonal => PeriodKey::Season(month_of(timestamp).season()),
            Self::Yearly => PeriodKey::Year(timestamp.year()),
            Self::All => PeriodKey::All,
        }
    }
}

/// Identity of one period group.
///
/// Ordering is calendar order within a kind, so sorted output runs
/// Jan..Dec, Win..Aut, or ascending years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Month(Month),
    Season(Season),
    Year(i32),
    All,
}

impl PeriodKey {
    /// Kind of grouping this key belongs to.
    pub fn kind(self) -> PeriodKind {
        match self {
            Self::Month(_) => PeriodKind::Monthly,
            Self::Season(_) => PeriodKind::Seasonal,
            Self::Year(_) => PeriodKind::Yearly,
            Self::All => PeriodKind::All,
        }
    }

    /// Categorical bin label, e.g. `"Monthly: Jan"` or `"Yearly: 2020"`.
    ///
    /// The single whole-record period is labelled `"All"`.
    pub fn bin_label(self) -> String {
        match self {
            Self::All => self.to_string(),
            _ => format!("{}: {}", self.kind().prefix(), self),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(m) => write!(f, "{m}"),
            Self::Season(s) => write!(f, "{s}"),
            Self::Year(y) => write!(f, "{y}"),
            Self::All => f.write_str("All"),
        }
    }
}

fn month_of(timestamp: &NaiveDateTime) -> Month {
    // chrono guarantees 1..=12
    Month::ALL[timestamp.month0() as usize]
}
