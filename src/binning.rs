//! Calendar bin labels for timestamps.

use chrono::NaiveDateTime;

use crate::types::{PeriodKey, PeriodKind};

/// Period key of every timestamp, aligned 1:1 with the input.
pub fn bin_timestamps(timestamps: &[NaiveDateTime], kind: PeriodKind) -> Vec<PeriodKey> {
    timestamps.iter().map(|ts| kind.key_for(ts)).collect()
}

/// Categorical label of every timestamp, e.g. `"Seasonally: Win"`.
///
/// # Example
///
/// ```
/// use aeolian_rs::binning::bin_labels;
/// use aeolian_rs::types::PeriodKind;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2020, 2, 14).unwrap().and_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(bin_labels(&[ts], PeriodKind::Monthly), vec!["Monthly: Feb"]);
/// assert_eq!(bin_labels(&[ts], PeriodKind::Seasonal), vec!["Seasonally: Win"]);
/// assert_eq!(bin_labels(&[ts], PeriodKind::Yearly), vec!["Yearly: 2020"]);
/// ```
pub fn bin_labels(timestamps: &[NaiveDateTime], kind: PeriodKind) -> Vec<String> {
    timestamps
        .iter()
        .map(|ts| kind.key_for(ts).bin_label())
        .collect()
}
