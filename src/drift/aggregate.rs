//! Period × direction aggregation of per-record drift potential.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use super::resultant::{DpReference, ResultantDrift, resultant};
use crate::error::{Result, WindRoseError, ensure_same_len};
use crate::summary::compensated_sum;
use crate::types::{CardinalDirection, PeriodKey, PeriodKind};

/// One long-form row: summed drift potential for a period and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodDriftRow {
    pub period: PeriodKey,
    pub direction: CardinalDirection,
    pub drift_potential: f64,
}

/// Resultant for one period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodResultant {
    pub period: PeriodKey,
    /// Summed drift potential of the period
    pub drift_potential: f64,
    pub resultant: ResultantDrift,
}

/// Long-form drift potential table, sorted by period then clockwise direction.
///
/// Every period present holds exactly 16 rows, one per direction, with
/// directions that saw no records filled with zero. Only periods that
/// occur in the input appear.
#[derive(Clone, Debug, PartialEq)]
pub struct DriftPotentialTable {
    kind: PeriodKind,
    rows: Vec<PeriodDriftRow>,
}

impl DriftPotentialTable {
    fn from_groups(kind: PeriodKind, groups: BTreeMap<PeriodKey, [Vec<f64>; 16]>) -> Self {
        let rows = groups
            .into_iter()
            .flat_map(|(period, values)| {
                CardinalDirection::ALL
                    .into_iter()
                    .zip(values)
                    .map(move |(direction, v)| PeriodDriftRow {
                        period,
                        direction,
                        drift_potential: compensated_sum(&v),
                    })
            })
            .collect();
        Self { kind, rows }
    }

    /// Grouping used to build the table.
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// All rows in order.
    pub fn rows(&self) -> &[PeriodDriftRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Periods present, in calendar order.
    pub fn periods(&self) -> Vec<PeriodKey> {
        self.rows
            .chunks(CardinalDirection::COUNT)
            .map(|chunk| chunk[0].period)
            .collect()
    }

    /// Per-direction values of one period, `None` if the period is absent.
    pub fn distribution(&self, period: PeriodKey) -> Option<[f64; 16]> {
        let chunk = self
            .rows
            .chunks(CardinalDirection::COUNT)
            .find(|chunk| chunk[0].period == period)?;
        Some(std::array::from_fn(|i| chunk[i].drift_potential))
    }

    /// Sum of drift potential over one period.
    pub fn period_total(&self, period: PeriodKey) -> Option<f64> {
        self.distribution(period).map(|d| compensated_sum(&d))
    }

    /// Grand total over every row.
    pub fn total(&self) -> f64 {
        let values: Vec<f64> = self.rows.iter().map(|r| r.drift_potential).collect();
        compensated_sum(&values)
    }

    /// Re-aggregate every period into a single `All` period.
    ///
    /// The grand total is preserved.
    pub fn collapse(&self) -> Self {
        let mut values: [Vec<f64>; 16] = Default::default();
        for row in &self.rows {
            values[row.direction.index()].push(row.drift_potential);
        }
        let mut groups = BTreeMap::new();
        if !self.rows.is_empty() {
            groups.insert(PeriodKey::All, values);
        }
        Self::from_groups(PeriodKind::All, groups)
    }

    /// Resultant for every period, in calendar order.
    ///
    /// With [`DpReference::PerPeriod`] a period whose summed drift potential
    /// is not positive has no defined ratio and is reported as a plain vector.
    ///
    /// # Errors
    /// `InvalidParameter` for a non-positive [`DpReference::Total`].
    pub fn resultants(&self, reference: DpReference) -> Result<Vec<PeriodResultant>> {
        self.rows
            .chunks(CardinalDirection::COUNT)
            .map(|chunk| {
                let period = chunk[0].period;
                let distribution: [f64; 16] = std::array::from_fn(|i| chunk[i].drift_potential);
                let drift_potential = compensated_sum(&distribution);

                let dp = match reference {
                    DpReference::Omit => None,
                    DpReference::Total(dp) => Some(dp),
                    DpReference::PerPeriod if drift_potential > 0.0 => Some(drift_potential),
                    DpReference::PerPeriod => {
                        debug!(%period, "Period has no drift potential; ratio omitted");
                        None
                    }
                };

                Ok(PeriodResultant {
                    period,
                    drift_potential,
                    resultant: resultant(&distribution, dp)?,
                })
            })
            .collect()
    }
}

/// Group per-record drift potential by period and direction, summing each group.
///
/// # Errors
/// - `EmptyInput` for no records
/// - `LengthMismatch` if the three columns differ in length
/// - `InvalidParameter` for a non-finite drift potential
///
/// # Example
///
/// ```
/// use aeolian_rs::drift::aggregate;
/// use aeolian_rs::types::{CardinalDirection, PeriodKind};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let table = aggregate(
///     &[day(1), day(2)],
///     &[100.0, 50.0],
///     &[CardinalDirection::N, CardinalDirection::N],
///     PeriodKind::Monthly,
/// )
/// .unwrap();
/// assert_eq!(table.len(), 16);
/// assert_eq!(table.total(), 150.0);
/// ```
pub fn aggregate(
    timestamps: &[NaiveDateTime],
    drift_potential: &[f64],
    directions: &[CardinalDirection],
    kind: PeriodKind,
) -> Result<DriftPotentialTable> {
    if timestamps.is_empty() {
        return Err(WindRoseError::EmptyInput);
    }
    ensure_same_len(timestamps.len(), drift_potential.len())?;
    ensure_same_len(timestamps.len(), directions.len())?;

    let mut groups: BTreeMap<PeriodKey, [Vec<f64>; 16]> = BTreeMap::new();
    for (index, ((ts, &dp), dir)) in timestamps
        .iter()
        .zip(drift_potential)
        .zip(directions)
        .enumerate()
    {
        if !dp.is_finite() {
            return Err(WindRoseError::invalid_parameter(format!(
                "drift potential at record {index} is not finite: {dp}"
            )));
        }
        groups.entry(kind.key_for(ts)).or_default()[dir.index()].push(dp);
    }

    debug!(
        records = timestamps.len(),
        periods = groups.len(),
        kind = kind.prefix(),
        "Aggregated drift potential"
    );

    Ok(DriftPotentialTable::from_groups(kind, groups))
}

/// Compensated sum of raw drift potential values.
pub fn sum_dp(values: &[f64]) -> f64 {
    compensated_sum(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, Season};
    use chrono::NaiveDate;
    use crate::types::CardinalDirection::*;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample() -> (Vec<NaiveDateTime>, Vec<f64>, Vec<CardinalDirection>) {
        (
            vec![ts(2020, 1, 5), ts(2020, 1, 6), ts(2020, 3, 1), ts(2020, 7, 4), ts(2021, 12, 24)],
            vec![10.0, 5.0, 7.0, 3.0, 1.0],
            vec![N, N, E, S, W],
        )
    }

    #[test]
    fn test_monthly_groups() {
        let (t, dp, d) = sample();
        let table = aggregate(&t, &dp, &d, PeriodKind::Monthly).unwrap();

        assert_eq!(
            table.periods(),
            vec![
                PeriodKey::Month(Month::Jan),
                PeriodKey::Month(Month::Mar),
                PeriodKey::Month(Month::Jul),
                PeriodKey::Month(Month::Dec),
            ]
        );
        assert_eq!(table.len(), 4 * 16);

        let jan = table.distribution(PeriodKey::Month(Month::Jan)).unwrap();
        assert_eq!(jan[N.index()], 15.0);
        assert_eq!(jan.iter().sum::<f64>(), 15.0);
        assert!(table.distribution(PeriodKey::Month(Month::Feb)).is_none());
    }

    #[test]
    fn test_rows_sorted_by_period_then_direction() {
        let (t, dp, d) = sample();
        let table = aggregate(&t, &dp, &d, PeriodKind::Seasonal).unwrap();
        for pair in table.rows().windows(2) {
            assert!((pair[0].period, pair[0].direction) < (pair[1].period, pair[1].direction));
        }
        // Dec 2021 and Jan 2020 share winter
        assert_eq!(table.period_total(PeriodKey::Season(Season::Win)), Some(16.0));
    }

    #[test]
    fn test_yearly_and_all() {
        let (t, dp, d) = sample();
        let yearly = aggregate(&t, &dp, &d, PeriodKind::Yearly).unwrap();
        assert_eq!(yearly.periods(), vec![PeriodKey::Year(2020), PeriodKey::Year(2021)]);

        let all = aggregate(&t, &dp, &d, PeriodKind::All).unwrap();
        assert_eq!(all.periods(), vec![PeriodKey::All]);
        assert_eq!(all.total(), 26.0);
    }

    #[test]
    fn test_collapse_preserves_total() {
        let (t, dp, d) = sample();
        let monthly = aggregate(&t, &dp, &d, PeriodKind::Monthly).unwrap();
        let collapsed = monthly.collapse();

        assert_eq!(collapsed.kind(), PeriodKind::All);
        assert_eq!(collapsed.total(), sum_dp(&dp));
        assert_eq!(collapsed.collapse(), collapsed);
        assert_eq!(
            collapsed.distribution(PeriodKey::All),
            aggregate(&t, &dp, &d, PeriodKind::All).unwrap().distribution(PeriodKey::All)
        );
    }

    #[test]
    fn test_resultants_per_period() {
        let (t, dp, d) = sample();
        let table = aggregate(&t, &dp, &d, PeriodKind::Monthly).unwrap();

        let rows = table.resultants(DpReference::PerPeriod).unwrap();
        assert_eq!(rows.len(), 4);
        let jan = &rows[0];
        assert_eq!(jan.period, PeriodKey::Month(Month::Jan));
        assert_eq!(jan.drift_potential, 15.0);
        assert!((jan.resultant.rdp() - 15.0).abs() < 1e-9);
        assert!((jan.resultant.ratio().unwrap() - 1.0).abs() < 1e-12);

        let rows = table.resultants(DpReference::Total(26.0)).unwrap();
        assert!((rows[1].resultant.ratio().unwrap() - 7.0 / 26.0).abs() < 1e-12);

        let rows = table.resultants(DpReference::Omit).unwrap();
        assert!(rows.iter().all(|r| r.resultant.ratio().is_none()));

        assert!(table.resultants(DpReference::Total(0.0)).is_err());
    }

    #[test]
    fn test_zero_period_omits_ratio() {
        let table = aggregate(&[ts(2020, 1, 1)], &[0.0], &[N], PeriodKind::Monthly).unwrap();
        let rows = table.resultants(DpReference::PerPeriod).unwrap();
        assert_eq!(rows[0].resultant, ResultantDrift::Vector { rdp: 0.0, rdd: 0.0 });
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            aggregate(&[], &[], &[], PeriodKind::All),
            Err(WindRoseError::EmptyInput)
        );
        assert!(aggregate(&[ts(2020, 1, 1)], &[1.0, 2.0], &[N], PeriodKind::All).is_err());
        assert!(aggregate(&[ts(2020, 1, 1)], &[f64::NAN], &[N], PeriodKind::All).is_err());
    }

    #[test]
    fn test_sum_dp_is_compensated() {
        assert_eq!(sum_dp(&[1e16, 1.0, -1e16, 2.0]), 3.0);
    }
}
